use crate::header::{Header, Params};

/// Splits one raw header line into name, value and parameters.
///
/// Returns `None` when the line has no `:`; callers skip such lines.
/// Header bytes that are not UTF-8 are replaced with U+FFFD.
///
/// Parameters follow the first `;`. Each one is split on `=` for its name
/// and on the next `;` for its value; a value opening with `"` is cut at the
/// following `"`. Quoted `;` and escaped quotes are not recognized.
pub fn parse_header_line(line: &[u8]) -> Option<Header> {
    let line = String::from_utf8_lossy(line);
    let (name, rest) = line.split_once(':')?;

    let (value, params) = match rest.split_once(';') {
        Some((value, params)) => (value, Some(parse_params(params))),
        None => (rest, None),
    };

    Some(Header {
        name: name.trim().to_owned(),
        value: trim_linear_whitespace(value).to_owned(),
        params,
    })
}

fn parse_params(raw: &str) -> Params {
    let mut params = Params::new();
    let mut rest = raw.trim_start_matches(' ');

    // A trailing segment without `=` is dropped.
    while let Some((name, tail)) = rest.split_once('=') {
        let (value, next) = match tail.split_once(';') {
            Some((value, next)) => (value, Some(next)),
            None => (tail, None),
        };

        params.set(name.trim_start_matches(' '), unquote(value));

        match next {
            Some(next) => rest = next,
            None => break,
        }
    }

    params
}

fn unquote(value: &str) -> &str {
    match value.strip_prefix('"') {
        Some(quoted) => quoted.split_once('"').map_or(quoted, |(inner, _)| inner),
        None => trim_linear_whitespace(value),
    }
}

fn trim_linear_whitespace(value: &str) -> &str {
    value.trim_matches(|c| c == ' ' || c == '\t')
}
