//! Mapping list-filter state to the query strings of the list endpoints.
//!
//! A query value is plain data: two queries that compare equal produce
//! byte-identical query strings, so a query is also usable as a cache key.

use jiff::civil::Date;

use crate::{BiddingSessionStatus, BookingStatus};

/// Page sizes offered by the list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageLimit {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageLimit {
    pub const ALL: [Self; 4] = [Self::Ten, Self::Twenty, Self::Fifty, Self::Hundred];

    pub fn get(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl TryFrom<u32> for PageLimit {
    type Error = crate::requests::RequestError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|limit| limit.get() == value)
            .ok_or(crate::requests::RequestError::InvalidPageLimit(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Columns the bidding session list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionSortBy {
    #[default]
    CreatedAt,
    PickupAt,
    DropAt,
    Status,
}

impl SessionSortBy {
    pub const ALL: [Self; 4] =
        [Self::CreatedAt, Self::PickupAt, Self::DropAt, Self::Status];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::PickupAt => "pickupAt",
            Self::DropAt => "dropAt",
            Self::Status => "status",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CreatedAt => "Created",
            Self::PickupAt => "Pickup",
            Self::DropAt => "Drop-off",
            Self::Status => "Status",
        }
    }
}

/// A status filter where `All` leaves the parameter out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        Self::All
    }
}

impl<S: Copy> StatusFilter<S> {
    pub fn selected(&self) -> Option<S> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(*status),
        }
    }
}

/// Inclusive range of calendar days picked by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl DateRange {
    /// Start of the `from` day as an ISO-8601 UTC instant.
    pub fn from_param(&self) -> Option<String> {
        self.from.map(|date| format!("{date}T00:00:00.000Z"))
    }

    /// Last millisecond of the `to` day as an ISO-8601 UTC instant.
    pub fn to_param(&self) -> Option<String> {
        self.to.map(|date| format!("{date}T23:59:59.999Z"))
    }

    /// A range whose end precedes its start matches nothing; the screens
    /// flag it instead of sending it.
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if to < from)
    }
}

/// Parse the value of an `<input type="date">`. Empty means "no bound".
pub fn parse_date_input(
    value: &str,
) -> Result<Option<Date>, crate::requests::RequestError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<Date>()
        .map(Some)
        .map_err(|_| crate::requests::RequestError::InvalidDate(value.to_string()))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Filter, sort and paging state of the company bidding session list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BiddingSessionQuery {
    page: u32,
    pub limit: PageLimit,
    pub sort_by: SessionSortBy,
    pub sort_dir: SortDir,
    pub status: StatusFilter<BiddingSessionStatus>,
    pub dates: DateRange,
    pub operational_location_id: Option<String>,
}

impl Default for BiddingSessionQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageLimit::default(),
            sort_by: SessionSortBy::default(),
            sort_dir: SortDir::default(),
            status: StatusFilter::All,
            dates: DateRange::default(),
            operational_location_id: None,
        }
    }
}

impl BiddingSessionQuery {
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Jump to a page. Pages are 1-based; anything lower lands on 1.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_limit(&mut self, limit: PageLimit) {
        self.limit = limit;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter<BiddingSessionStatus>) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_dates(&mut self, dates: DateRange) {
        self.dates = dates;
        self.page = 1;
    }

    pub fn set_operational_location_id(&mut self, location: Option<String>) {
        self.operational_location_id = location;
        self.page = 1;
    }

    pub fn set_sort_dir(&mut self, sort_dir: SortDir) {
        self.sort_dir = sort_dir;
        self.page = 1;
    }

    /// Clicking the active column flips the direction; another column is
    /// selected with descending order.
    pub fn sort_on(&mut self, column: SessionSortBy) {
        if self.sort_by == column {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_by = column;
            self.sort_dir = SortDir::Desc;
        }
        self.page = 1;
    }

    /// Drop every filter but keep page size and ordering.
    pub fn clear_filters(&mut self) {
        self.status = StatusFilter::All;
        self.dates = DateRange::default();
        self.operational_location_id = None;
        self.page = 1;
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.get().to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortDir", self.sort_dir.as_str().to_string()),
        ];
        if let Some(status) = self.status.selected() {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(from) = self.dates.from_param() {
            pairs.push(("dateFrom", from));
        }
        if let Some(to) = self.dates.to_param() {
            pairs.push(("dateTo", to));
        }
        if let Some(location) = non_blank(&self.operational_location_id) {
            pairs.push(("operationalLocationId", location.to_string()));
        }
        pairs
    }
}

/// Filter, sort and paging state of the company booking list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingQuery {
    page: u32,
    pub limit: PageLimit,
    pub sort_dir: SortDir,
    pub status: StatusFilter<BookingStatus>,
    pub dates: DateRange,
}

impl Default for BookingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageLimit::default(),
            sort_dir: SortDir::default(),
            status: StatusFilter::All,
            dates: DateRange::default(),
        }
    }
}

impl BookingQuery {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_limit(&mut self, limit: PageLimit) {
        self.limit = limit;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: StatusFilter<BookingStatus>) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_dates(&mut self, dates: DateRange) {
        self.dates = dates;
        self.page = 1;
    }

    pub fn toggle_sort_dir(&mut self) {
        self.sort_dir = self.sort_dir.toggled();
        self.page = 1;
    }

    /// Bookings are always ordered by pickup time.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.get().to_string()),
            ("sortBy", "pickupAt".to_string()),
            ("sortDir", self.sort_dir.as_str().to_string()),
        ];
        if let Some(status) = self.status.selected() {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(from) = self.dates.from_param() {
            pairs.push(("dateFrom", from));
        }
        if let Some(to) = self.dates.to_param() {
            pairs.push(("dateTo", to));
        }
        pairs
    }
}
