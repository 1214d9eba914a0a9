/// Terms whose presence marks a pull request as security relevant.
/// Scanned in this order; the first hit decides.
pub const SECURITY_KEYWORDS: &[&str] = &[
    "race",
    "racy",
    "buffer",
    "overflow",
    "stack",
    "integer",
    "signedness",
    "underflow",
    "improper",
    "unauthenticated",
    "gain access",
    "permission",
    "cross site",
    "css",
    "xss",
    "denial service",
    "dos",
    "crash",
    "deadlock",
    "injection",
    "request forgery",
    "csrf",
    "xsrf",
    "forged",
    "security",
    "vulnerability",
    "vulnerable",
    "exploit",
    "attack",
    "bypass",
    "backdoor",
    "threat",
    "expose",
    "breach",
    "violate",
    "fatal",
    "blacklist",
    "overrun",
    "insecure",
];

/// `1` if any keyword occurs as a substring of `"{title} {body}"`
/// (case-insensitive), else `0`. Missing text counts as empty.
pub fn classify(title: Option<&str>, body: Option<&str>) -> u8 {
    let text = format!("{} {}", title.unwrap_or(""), body.unwrap_or("")).to_lowercase();
    let hit = SECURITY_KEYWORDS
        .iter()
        .any(|kw| text.contains(kw.to_lowercase().as_str()));
    u8::from(hit)
}
