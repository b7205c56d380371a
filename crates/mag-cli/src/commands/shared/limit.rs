/// Resolve the display cap for list commands: the global `--limit` flag wins,
/// otherwise the configured default.
#[must_use]
pub fn effective_limit(flag: Option<u32>, default: u32) -> usize {
    flag.unwrap_or(default) as usize
}
