use crate::constants::{
    EXTENSION_SUFFIX_REGEX, PARSE_INT_REGEX, TRAILING_URL_REGEX, VIDEO_ID_REGEX,
    YOUTUBE_URL_PREFIX_REGEX,
};

/// Check that `url` follows a YouTube video URL syntax. No network call is made.
pub fn is_valid_youtube_url(url: &str) -> bool {
    get_video_id(url).is_some()
}

/// Excavate the 11 character video id from a YouTube URL with Regex
///
/// Candidate id positions are tried from the end of the URL backwards, so when several
/// positions qualify the one reached by the greediest prefix wins.
pub fn get_video_id(url: &str) -> Option<String> {
    url.char_indices()
        .map(|(start, _)| start)
        .rev()
        .filter(|start| YOUTUBE_URL_PREFIX_REGEX.is_match(&url[..*start]))
        .find_map(|start| {
            let id = VIDEO_ID_REGEX.find(&url[start..])?;
            let rest = &url[start + id.end()..];

            if TRAILING_URL_REGEX.is_match(rest) || EXTENSION_SUFFIX_REGEX.is_match(rest) {
                return None;
            }

            Some(id.as_str().to_string())
        })
}

/// Bare video id for `url`, or `url` itself when no id can be found
pub fn video_ref(url: &str) -> String {
    get_video_id(url).unwrap_or_else(|| url.to_string())
}

/// Sanitize filename to remove invalid characters
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .trim_end_matches('.')
        .to_string()
}

/// `<title>.<extension>`, using `fallback` when the title sanitizes to nothing
pub fn default_filename(title: &str, fallback: &str, extension: &str) -> String {
    let name = sanitize_filename(title);
    let name = if name.is_empty() {
        fallback.to_string()
    } else {
        name
    };

    format!("{name}.{extension}")
}

/// Replace everything after the last `.` with `extension`, or append it when there is no dot
pub fn replace_extension(filename: &str, extension: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, _)) => format!("{stem}.{extension}"),
        None => format!("{filename}.{extension}"),
    }
}

/// Leading integer of a quality label such as `1080p60`
pub fn parse_resolution(label: &str) -> Option<u32> {
    PARSE_INT_REGEX
        .captures(label)
        .and_then(|x| x.get(1))
        .and_then(|x| x.as_str().parse::<u32>().ok())
}
