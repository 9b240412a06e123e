use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use rosterview::{Category, Developer, DeveloperId, filter};

use crate::{Annotations, LoadError, LoadRequest, Prediction, Rating, RosterSource};

pub const MOCK_DOMAINS: [&str; 4] = ["3D", "Ajax", "Algorithm", "Amp"];
pub const MOCK_NATIONALITIES: [&str; 5] = ["China", "America", "Japan", "England", "Russia"];

/// A deterministic roster generator standing in for a remote source.
///
/// Records are named `Developer {n}` with ids `1..=count`, a domain from [`MOCK_DOMAINS`], a
/// nationality from [`MOCK_NATIONALITIES`] and a rank in `1..=100`. The same seed always yields
/// the same roster.
#[derive(Clone, Debug)]
pub struct MockRoster {
    count: usize,
    seed: u64,
    loads: usize,
}

impl MockRoster {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            loads: 0,
        }
    }

    /// Number of loads served so far.
    pub fn loads(&self) -> usize {
        self.loads
    }

    pub fn generate(&self) -> Vec<Developer> {
        let domains: Vec<Category> = MOCK_DOMAINS.iter().map(|&d| d.into()).collect();
        let nations: Vec<Category> = MOCK_NATIONALITIES.iter().map(|&n| n.into()).collect();
        let mut rng = Lcg(self.seed);
        (1..=self.count as u64)
            .map(|id| Developer {
                id: DeveloperId(id),
                name: format!("Developer {id}"),
                domain: domains[rng.below(domains.len() as u64) as usize].clone(),
                nationality: Some(nations[rng.below(nations.len() as u64) as usize].clone()),
                rank: rng.below(100) as u32 + 1,
            })
            .collect()
    }
}

impl RosterSource for MockRoster {
    fn load(&mut self, request: &LoadRequest) -> Result<Vec<Developer>, LoadError> {
        self.loads += 1;
        let all = self.generate();
        Ok(match request {
            LoadRequest::All => all,
            LoadRequest::Filtered(spec) => filter(&all, spec),
        })
    }
}

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // High bits have the longest period.
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound.max(1)
    }
}

/// The five hand-written records used by demos and tests.
pub fn sample_roster() -> Vec<Developer> {
    let row = |id: u64, name: &str, domain: &str, nation: &str, rank: u32| {
        Developer::new(id, name, domain, Some(nation.into()), rank)
    };
    vec![
        row(1, "Alice", "3D", "USA", 92),
        row(2, "Bob", "AjaxAlgorithm", "China", 75),
        row(3, "Charlie", "Amp", "India", 88),
        row(4, "David", "3D", "USA", 60),
        row(5, "Eva", "AjaxAlgorithm", "China", 80),
    ]
}

/// Prediction and rating data for [`sample_roster`].
pub fn sample_annotations() -> Annotations {
    // (id, nationality, confidence, [China, USA, India], score, projects, contributions)
    let data: [(u64, &str, u8, [u8; 3], u8, u32, u32); 5] = [
        (1, "USA", 85, [10, 85, 5], 92, 15, 500),
        (2, "China", 78, [78, 15, 7], 75, 10, 300),
        (3, "India", 70, [20, 10, 70], 88, 12, 450),
        (4, "USA", 82, [8, 82, 10], 60, 5, 150),
        (5, "China", 75, [75, 20, 5], 80, 8, 350),
    ];
    let candidates: [Category; 3] = ["China".into(), "USA".into(), "India".into()];

    let mut out = Annotations::new();
    for (id, nation, confidence, probs, score, projects, contributions) in data {
        let id = DeveloperId(id);
        out.insert_prediction(
            id,
            Prediction {
                nationality: nation.into(),
                confidence,
                probabilities: candidates.iter().cloned().zip(probs).collect(),
            },
        );
        out.insert_rating(
            id,
            Rating {
                score,
                projects,
                contributions,
            },
        );
    }
    out
}
