// https://datatracker.ietf.org/doc/html/rfc7208#section-5

/// One actionable mechanism pulled out of an SPF policy string.
#[derive(Debug, PartialEq, Eq)]
pub enum Mechanism<'a> {
    Ip4(&'a str),
    Ip6(&'a str),
    Include(&'a str),
    Redirect(&'a str),
    Mx,
    A,
}

/// Tokenize one TXT record's text as an SPF policy.
///
/// Returns `None` unless the text starts with the `v=spf1 ` version tag.
/// Address literals are passed through without validation. Qualifiers
/// other than an optional leading `+` are not handled, so `-all`, `~all`
/// and anything else unrecognized fall through silently, as do the empty
/// tokens produced by repeated spaces.
pub fn spf_mechanisms(text: &str) -> Option<Vec<Mechanism>> {
    if !has_prefix(text, "v=spf1 ") {
        return None;
    }

    let mut mechanisms = Vec::new();
    for token in text.split(' ') {
        if token.eq_ignore_ascii_case("v=spf1") {
            continue;
        }

        if let Some(addr) = strip_tag(token, "ip4:").or_else(|| strip_tag(token, "+ip4:")) {
            mechanisms.push(Mechanism::Ip4(addr));
        } else if let Some(addr) = strip_tag(token, "ip6:").or_else(|| strip_tag(token, "+ip6:")) {
            mechanisms.push(Mechanism::Ip6(addr));
        } else if let Some(name) = strip_tag(token, "include:") {
            mechanisms.push(Mechanism::Include(name));
        } else if let Some(name) = strip_tag(token, "redirect=") {
            mechanisms.push(Mechanism::Redirect(name));
        } else if token.eq_ignore_ascii_case("mx") || token.eq_ignore_ascii_case("+mx") {
            mechanisms.push(Mechanism::Mx);
        } else if token.eq_ignore_ascii_case("a") || token.eq_ignore_ascii_case("+a") {
            mechanisms.push(Mechanism::A);
        }
    }

    Some(mechanisms)
}

fn has_prefix(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

fn strip_tag<'a>(token: &'a str, tag: &str) -> Option<&'a str> {
    if has_prefix(token, tag) {
        Some(&token[tag.len()..])
    } else {
        None
    }
}
