use smallvec::SmallVec;

/// Colon-separated tokens of a location fragment, `volume[:book[:chapter]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    tokens: SmallVec<[&'a str; 3]>,
}

impl<'a> Fragment<'a> {
    /// Splits a fragment, with or without its leading `#`. An empty fragment
    /// or a lone `#` has no tokens.
    pub fn parse(raw: &'a str) -> Self {
        let raw = raw.strip_prefix('#').unwrap_or(raw);
        let tokens = if raw.is_empty() {
            SmallVec::new()
        } else {
            raw.split(':').collect()
        };
        Self { tokens }
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Numeric value of the token at `index`; `None` when the token is
    /// missing or not an integer.
    pub fn number(&self, index: usize) -> Option<i64> {
        self.tokens.get(index).and_then(|token| parse_number(token))
    }
}

/// Blank tokens read as zero, anything else must be an integer.
fn parse_number(token: &str) -> Option<i64> {
    let token = token.trim();
    if token.is_empty() {
        return Some(0);
    }
    token.parse().ok()
}
