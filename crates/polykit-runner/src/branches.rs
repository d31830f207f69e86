//! Parsing of `git branch -a` output.

/// Branch names from `git branch -a` output: current-branch markers and
/// remote prefixes are stripped, `HEAD` entries skipped, and the result is
/// de-duplicated and sorted.
pub fn parse_branch_list(output: &str) -> Vec<String> {
    let mut branches: Vec<String> = Vec::new();
    for line in output.lines() {
        let mut name = line.trim();
        if let Some(rest) = name.strip_prefix('*') {
            name = rest.trim();
        }
        if let Some((_, last)) = name.rsplit_once('/') {
            name = last;
        }
        if name.is_empty() || name.contains("HEAD") {
            continue;
        }
        if !branches.iter().any(|b| b == name) {
            branches.push(name.to_string());
        }
    }
    branches.sort();
    branches
}
