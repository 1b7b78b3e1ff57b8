// Recently analyzed tickers, most recent first

/// Unique, capped list of tickers. Process lifetime only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cap: usize,
}

impl History {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
            cap,
        }
    }

    /// Move `ticker` to the front, dropping any earlier occurrence and
    /// evicting the oldest entries beyond the cap.
    pub fn push(&mut self, ticker: &str) {
        self.entries.retain(|t| t != ticker);
        self.entries.insert(0, ticker.to_string());
        self.entries.truncate(self.cap);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_deduplicates_to_front() {
        let mut history = History::new(10);
        history.push("AAPL");
        history.push("MSFT");
        history.push("AAPL");
        assert_eq!(history.entries(), &["AAPL".to_string(), "MSFT".to_string()]);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut history = History::new(10);
        for i in 0..11 {
            history.push(&format!("T{}", i));
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.get(0), Some("T10"));
        assert_eq!(history.get(9), Some("T1"));
        assert!(!history.entries().contains(&"T0".to_string()));
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let mut history = History::new(10);
        history.push("aapl");
        history.push("AAPL");
        assert_eq!(history.len(), 2);
    }
}
