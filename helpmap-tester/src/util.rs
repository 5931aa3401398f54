use anyhow::{Context, Result};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse `--slides`, e.g. `3,7,9`.
pub fn parse_slide_counts(s: &str) -> Result<Vec<usize>> {
    split_csv(s)
        .iter()
        .map(|token| {
            token
                .parse::<usize>()
                .with_context(|| format!("invalid slide count `{token}`"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        assert_eq!(split_csv(" a, ,b,  c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn slide_counts_reject_garbage() {
        assert_eq!(parse_slide_counts("3, 9,10").unwrap(), vec![3, 9, 10]);
        let err = parse_slide_counts("3,nine").unwrap_err();
        assert!(err.to_string().contains("nine"));
    }
}
