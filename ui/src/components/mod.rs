pub mod bidding_sessions_table;
pub mod confirm_dialog;
pub mod filters;
pub mod layout;
pub mod location_select;
pub mod modal;
pub mod pagination_controls;
pub mod percentage_field;
pub mod pricing_fields;
pub mod require_auth;
pub mod tax_dialog;
pub mod toast;

pub use bidding_sessions_table::BiddingSessionsTable;
pub use confirm_dialog::ConfirmDialog;
pub use filters::{DateRangeFilter, StatusSelect};
pub use location_select::LocationSelect;
pub use modal::Modal;
pub use pagination_controls::PaginationControls;
pub use percentage_field::PercentageField;
pub use pricing_fields::PricingFields;
pub use require_auth::RequireAuth;
pub use tax_dialog::TaxDialog;
pub use toast::ToastContainer;
