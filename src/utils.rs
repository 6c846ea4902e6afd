use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

pub const PUBLISH_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

const MIXCLOUD_HOST: &str = "mixcloud.com";

/// Splits comma separated tags, dropping blanks.
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Returns `input` unless it is blank, in which case `default` is used.
pub fn or_default(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.trim().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses a `DD/MM/YYYY HH:MM` date in the time zone of `now` and returns it
/// as RFC 3339 in UTC. The date has to lie after `now`.
pub fn parse_publish_date<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> Result<String, String> {
    let input = input.trim();
    let naive = NaiveDateTime::parse_from_str(input, PUBLISH_DATE_FORMAT)
        .map_err(|e| format!("Incorrect date format '{}' - {}", input, e))?;

    let publish = now
        .timezone()
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("Date {} does not exist in the local time zone", input))?;

    if publish <= *now {
        return Err(format!("Date {} is not in the future", input));
    }

    Ok(publish
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Normalizes a cloudcast key to `/user/slug/`.
///
/// Accepts the bare key (`user/slug`), the key as returned by the API
/// (`/user/slug/`) or a full cloudcast URL.
pub fn cloudcast_key(input: &str) -> Result<String, String> {
    let path = match input.split_once(MIXCLOUD_HOST) {
        Some((_, rest)) => rest,
        None => input,
    };

    let path = path.trim().trim_matches('/');
    let path = path.strip_suffix("/edit").unwrap_or(path);
    if path.is_empty() {
        return Err(format!("'{}' is not a cloudcast key", input));
    }

    Ok(format!("/{}/", path))
}

/// Public edit page for a cloudcast key returned by the upload API.
pub fn edit_page_url(key: &str) -> String {
    format!("https://www.{}{}edit/", MIXCLOUD_HOST, key)
}
