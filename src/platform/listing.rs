// ABOUTME: Positional parsing of human-oriented cf CLI listings.
// ABOUTME: The only place that knows which line of `cf target` and `cf domains` matters.

// These line positions match the text layout of the cf CLI this tool was
// written against. They are an assumption, not a contract: a CLI release that
// adds or drops a header line breaks them silently. If the platform grows a
// machine-readable equivalent, replace these two functions and nothing else.

/// Line of `cf target` output that carries the space.
pub const TARGET_SPACE_LINE: usize = 4;

/// Line of `cf domains` output that carries the first domain.
pub const DOMAIN_LINE: usize = 2;

const SPACE_PREFIX: &str = "Space:";
const NO_SPACE_SENTINEL: &str = "No space targeted";
const OWNERSHIP_TAGS: [&str; 2] = ["shared", "owned"];

/// Extract the targeted space name from `cf target` output.
///
/// Returns `None` when the output is too short, the space line lacks the
/// `Space:` prefix, the CLI reports that no space is targeted, or the name
/// is empty.
pub fn target_space(lines: &[String]) -> Option<String> {
    let line = lines.get(TARGET_SPACE_LINE)?;
    if !line.starts_with(SPACE_PREFIX) || line.contains(NO_SPACE_SENTINEL) {
        return None;
    }

    let space = line.trim().strip_prefix(SPACE_PREFIX)?.trim();
    (!space.is_empty()).then(|| space.to_string())
}

/// Extract the first domain from `cf domains` output, without its
/// trailing ownership tag.
pub fn first_domain(lines: &[String]) -> Option<String> {
    let mut domain = lines.get(DOMAIN_LINE)?.trim();
    for tag in OWNERSHIP_TAGS {
        domain = domain.strip_suffix(tag).unwrap_or(domain);
    }

    let domain = domain.trim();
    (!domain.is_empty()).then(|| domain.to_string())
}
