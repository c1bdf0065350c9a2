use url::Url;

const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
const MAX_NAME_LEN: usize = 100;

fn is_symbol_or_emoji(c: char) -> bool {
    matches!(c as u32, 0x1F300..=0x1F9FF | 0x2600..=0x26FF | 0x2700..=0x27BF)
}

/// Make a free-form string safe to use as a single path component.
pub fn sanitize(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .filter(|c| !RESERVED_CHARS.contains(c) && !is_symbol_or_emoji(*c))
        .take(MAX_NAME_LEN)
        .collect();
    sanitized.trim().to_string()
}

/// Handle of the creator, i.e. whatever follows the last `@` of the profile url.
pub fn creator_name(creator_url: &str) -> &str {
    creator_url.rsplit('@').next().unwrap_or(creator_url)
}

/// `https://www.tiktok.com/@someone/video/123` -> `https://www.tiktok.com/@someone`
pub fn creator_url_from_video_url(video_url: &str) -> Option<String> {
    let url = Url::parse(video_url).ok()?;
    let host = url.host_str()?;
    let handle = url
        .path_segments()?
        .find(|segment| segment.starts_with('@') && segment.len() > 1)?;
    Some(format!("{}://{}/{}", url.scheme(), host, handle))
}
