use url::form_urlencoded;
use url::Url;

use crate::workflows::inspection::InspectionRecord;

const NAME_PARAM: &str = "name";

/// Reads the `name` parameter from a link into the wizard. Hash-routed links
/// (`/#/?name=...`) take precedence over the regular query string. Relative
/// links such as `?name=Chen` are accepted.
pub fn customer_name_from_url(raw: &str) -> Option<String> {
    let base = Url::parse("http://localhost/").ok()?;
    let url = Url::options().base_url(Some(&base)).parse(raw.trim()).ok()?;

    let hash_query = url
        .fragment()
        .and_then(|fragment| fragment.split('?').nth(1))
        .filter(|query| !query.is_empty());

    let query = hash_query.or_else(|| url.query())?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == NAME_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

pub fn seed_from_url(raw: &str) -> InspectionRecord {
    match customer_name_from_url(raw) {
        Some(name) => InspectionRecord::for_customer(name),
        None => InspectionRecord::default(),
    }
}
