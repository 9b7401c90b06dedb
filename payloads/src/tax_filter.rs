use crate::responses::CompanyLocationTax;

/// Page size used when listing a location's taxes. Large enough to fetch
/// every tax in one request; the list is then searched locally.
pub const TAX_LIST_FETCH_LIMIT: u32 = 1000;

/// Keep taxes whose title or description contains `search`, ignoring case.
/// A blank search keeps everything. Order is preserved.
pub fn filter_taxes<'a>(
    taxes: &'a [CompanyLocationTax],
    search: &str,
) -> Vec<&'a CompanyLocationTax> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return taxes.iter().collect();
    }

    taxes
        .iter()
        .filter(|tax| {
            tax.title.to_lowercase().contains(&needle)
                || tax
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}
