//! Fixed election results for the two voting methods.
//!
//! Results are static teaching data, not an aggregation of submitted
//! ballots. Two parallel tallies exist, one per voting method, selected by
//! a [View] toggle. The only computation is display formatting: a
//! distribution in declaration order, a ranking ordered by votes, and
//! percentages rendered to one decimal place.

/// Votes recorded for one candidate.
pub struct Count {
    /// Candidate display name.
    pub name: &'static str,
    /// Votes received.
    pub votes: u64,
}

/// One voting method's complete tally.
pub struct Tally {
    /// Total ballots cast.
    pub total: u64,
    /// Per-candidate counts, in declaration order.
    pub counts: &'static [Count],
    /// Proofs submitted, for the zero-knowledge method.
    pub proofs_submitted: Option<u64>,
    /// Proofs that verified on-chain, for the zero-knowledge method.
    pub proofs_verified: Option<u64>,
}

impl Tally {
    /// Share of the total for `votes`, formatted to one decimal place.
    pub fn percent(&self, votes: u64) -> String {
        format!("{:.1}", votes as f64 * 100.0 / self.total as f64)
    }

    /// Counts in declaration order, as shown in the distribution view.
    pub fn distribution(&self) -> &'static [Count] {
        self.counts
    }

    /// Counts ordered by votes, highest first.
    ///
    /// The sort is stable, so candidates with equal votes keep their
    /// declaration order.
    pub fn ranked(&self) -> Vec<&Count> {
        let mut ranked: Vec<_> = self.counts.iter().collect();
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
        ranked
    }
}

/// Which voting method's tally is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Plain on-chain voting.
    Traditional,
    /// Zero-knowledge voting (the default view).
    #[default]
    ZeroKnowledge,
}

impl View {
    /// The other view.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Traditional => Self::ZeroKnowledge,
            Self::ZeroKnowledge => Self::Traditional,
        }
    }
}

/// Tally for plain on-chain voting.
pub const TRADITIONAL: Tally = Tally {
    total: 150,
    counts: &[
        Count {
            name: "候选人 A / Candidate A",
            votes: 65,
        },
        Count {
            name: "候选人 B / Candidate B",
            votes: 52,
        },
        Count {
            name: "候选人 C / Candidate C",
            votes: 33,
        },
    ],
    proofs_submitted: None,
    proofs_verified: None,
};

/// Tally for zero-knowledge voting.
///
/// The counts match [TRADITIONAL] exactly. Both methods describe the same
/// fictional election, differing only in how ballots were recorded.
pub const ZERO_KNOWLEDGE: Tally = Tally {
    total: 150,
    counts: &[
        Count {
            name: "候选人 A / Candidate A",
            votes: 65,
        },
        Count {
            name: "候选人 B / Candidate B",
            votes: 52,
        },
        Count {
            name: "候选人 C / Candidate C",
            votes: 33,
        },
    ],
    proofs_submitted: Some(150),
    proofs_verified: Some(150),
};

/// The tally displayed for `view`.
pub fn tally(view: View) -> &'static Tally {
    match view {
        View::Traditional => &TRADITIONAL,
        View::ZeroKnowledge => &ZERO_KNOWLEDGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(65, "43.3"; "first candidate")]
    #[test_case(52, "34.7"; "second candidate")]
    #[test_case(33, "22.0"; "third candidate")]
    fn test_percent_one_decimal(votes: u64, expected: &str) {
        assert_eq!(TRADITIONAL.percent(votes), expected);
        assert_eq!(ZERO_KNOWLEDGE.percent(votes), expected);
    }

    #[test]
    fn test_percentages_sum_to_whole() {
        for tally in [&TRADITIONAL, &ZERO_KNOWLEDGE] {
            let sum: f64 = tally
                .counts
                .iter()
                .map(|count| tally.percent(count.votes).parse::<f64>().unwrap())
                .sum();
            assert!((sum - 100.0).abs() < 0.1, "percentages sum to {sum}");
            let votes: u64 = tally.counts.iter().map(|count| count.votes).sum();
            assert_eq!(votes, tally.total);
        }
    }

    #[test]
    fn test_ranking_descends() {
        let ranked = ZERO_KNOWLEDGE.ranked();
        let votes: Vec<_> = ranked.iter().map(|count| count.votes).collect();
        assert_eq!(votes, vec![65, 52, 33]);
        assert_eq!(ranked[0].name, "候选人 A / Candidate A");
        assert_eq!(ranked[1].name, "候选人 B / Candidate B");
        assert_eq!(ranked[2].name, "候选人 C / Candidate C");
    }

    #[test]
    fn test_distribution_keeps_declaration_order() {
        // Declaration order is independent of vote counts: even when the
        // leader is declared last, the distribution view does not reorder.
        const UNSORTED: Tally = Tally {
            total: 100,
            counts: &[
                Count {
                    name: "trailing",
                    votes: 20,
                },
                Count {
                    name: "leading",
                    votes: 80,
                },
            ],
            proofs_submitted: None,
            proofs_verified: None,
        };
        let names: Vec<_> = UNSORTED
            .distribution()
            .iter()
            .map(|count| count.name)
            .collect();
        assert_eq!(names, vec!["trailing", "leading"]);
        let ranked: Vec<_> = UNSORTED.ranked().iter().map(|count| count.name).collect();
        assert_eq!(ranked, vec!["leading", "trailing"]);

        for tally in [&TRADITIONAL, &ZERO_KNOWLEDGE] {
            let votes: Vec<_> = tally
                .distribution()
                .iter()
                .map(|count| count.votes)
                .collect();
            assert_eq!(votes, vec![65, 52, 33]);
        }
    }

    #[test]
    fn test_ranking_is_stable_on_ties() {
        const TIED: Tally = Tally {
            total: 100,
            counts: &[
                Count {
                    name: "first",
                    votes: 50,
                },
                Count {
                    name: "second",
                    votes: 50,
                },
            ],
            proofs_submitted: None,
            proofs_verified: None,
        };
        let ranked = TIED.ranked();
        assert_eq!(ranked[0].name, "first");
        assert_eq!(ranked[1].name, "second");
    }

    #[test]
    fn test_methods_share_counts() {
        // The two methods intentionally report the same election.
        assert_eq!(TRADITIONAL.total, ZERO_KNOWLEDGE.total);
        for (a, b) in TRADITIONAL.counts.iter().zip(ZERO_KNOWLEDGE.counts) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.votes, b.votes);
        }
        assert_eq!(TRADITIONAL.proofs_submitted, None);
        assert_eq!(ZERO_KNOWLEDGE.proofs_submitted, Some(150));
        assert_eq!(ZERO_KNOWLEDGE.proofs_verified, Some(150));
    }

    #[test]
    fn test_default_view_is_zero_knowledge() {
        assert_eq!(View::default(), View::ZeroKnowledge);
        assert_eq!(View::default().toggled(), View::Traditional);
        assert_eq!(View::default().toggled().toggled(), View::ZeroKnowledge);
    }
}
