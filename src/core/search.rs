//! Free-text filter over advocate records.
//!
//! A query matches a record when any of the searchable fields contains the
//! trimmed, lower-cased query as a substring. The empty query matches every
//! record, which is what makes an empty search show the full list.

use crate::domain::model::{number_to_string, AdvocateRow, Experience, TextOrList};

/// 單一欄位的搜尋值
#[derive(Debug, Clone, Copy)]
pub enum SearchField<'a> {
    Text(&'a str),
    List(&'a [String]),
    Number(&'a serde_json::Number),
    Bool(bool),
    Absent,
}

impl<'a> From<&'a str> for SearchField<'a> {
    fn from(s: &'a str) -> Self {
        SearchField::Text(s)
    }
}

impl<'a> From<&'a String> for SearchField<'a> {
    fn from(s: &'a String) -> Self {
        SearchField::Text(s)
    }
}

impl<'a> From<&'a [String]> for SearchField<'a> {
    fn from(items: &'a [String]) -> Self {
        SearchField::List(items)
    }
}

impl<'a> From<&'a serde_json::Number> for SearchField<'a> {
    fn from(n: &'a serde_json::Number) -> Self {
        SearchField::Number(n)
    }
}

impl From<bool> for SearchField<'_> {
    fn from(b: bool) -> Self {
        SearchField::Bool(b)
    }
}

impl<'a> From<&'a TextOrList> for SearchField<'a> {
    fn from(value: &'a TextOrList) -> Self {
        match value {
            TextOrList::Text(s) => SearchField::Text(s),
            TextOrList::List(items) => SearchField::List(items),
        }
    }
}

impl<'a> From<&'a Experience> for SearchField<'a> {
    fn from(value: &'a Experience) -> Self {
        match value {
            Experience::Number(n) => SearchField::Number(n),
            Experience::Text(s) => SearchField::Text(s),
        }
    }
}

impl<'a, T> From<Option<T>> for SearchField<'a>
where
    T: Into<SearchField<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SearchField::Absent)
    }
}

/// Does `field` match `needle`?
///
/// The needle is trimmed and lower-cased first; an empty needle matches
/// anything, including an absent field. Lists match when any element does.
pub fn contains<'a>(field: impl Into<SearchField<'a>>, needle: &str) -> bool {
    let n = needle.trim().to_lowercase();
    if n.is_empty() {
        return true;
    }

    match field.into() {
        SearchField::Absent => false,
        SearchField::List(items) => items.iter().any(|s| s.to_lowercase().contains(&n)),
        SearchField::Text(s) => s.to_lowercase().contains(&n),
        // 數字以字串比對，所以 "5" 也會命中 15
        SearchField::Number(num) => number_to_string(num).contains(&n),
        SearchField::Bool(b) => b.to_string().contains(&n),
    }
}

impl AdvocateRow {
    /// 可搜尋欄位，依比對順序
    pub fn search_fields(&self) -> [SearchField<'_>; 8] {
        [
            SearchField::from(&self.first_name),
            SearchField::from(&self.last_name),
            SearchField::from(self.city.as_ref()),
            SearchField::from(self.degree.as_ref()),
            SearchField::from(self.specialties.as_ref()),
            SearchField::from(self.languages.as_ref()),
            SearchField::from(self.years_of_experience.as_ref()),
            SearchField::from(self.phone_number.as_ref()),
        ]
    }
}

pub fn matches_advocate_query(advocate: &AdvocateRow, query: &str) -> bool {
    advocate
        .search_fields()
        .into_iter()
        .any(|field| contains(field, query))
}

/// Binds `query` into a predicate suitable for `Iterator::filter`.
pub fn build_advocate_filter(query: &str) -> impl Fn(&AdvocateRow) -> bool + '_ {
    move |row| matches_advocate_query(row, query)
}
