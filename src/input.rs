
/// Split raw puzzle input into lines
pub fn lines(input: &str) -> Vec<&str> {
    input.split('\n').collect()
}

/// Split raw puzzle input on an arbitrary separator
pub fn split_on<'a>(input: &'a str, splitter: &str) -> Vec<&'a str> {
    input.split(splitter).collect()
}

/// Split raw puzzle input into blank-line-delimited sections
/// Surrounding newlines are stripped from each section; empty sections are dropped
pub fn blocks(input: &str) -> Vec<&str> {
    input
        .split("\n\n")
        .map(|block| block.trim_matches('\n'))
        .filter(|block| !block.is_empty())
        .collect()
}
