pub mod boltzmann;
pub mod differential_evolution;
pub mod linear_ranking;
pub mod neighborhood;
pub mod population_neighborhood;
pub mod random;
pub(crate) mod sampling;
pub mod selection_operator;
pub mod stochastic_universal;
pub mod tournament;
pub mod truncation;

pub use boltzmann::BoltzmannSelection;
pub use differential_evolution::DifferentialEvolutionSelection;
pub use linear_ranking::LinearRankingSelection;
pub use neighborhood::NeighborhoodSelection;
pub use population_neighborhood::{NeighborType, PopulationAndNeighborhoodSelection};
pub use random::RandomSelection;
pub use selection_operator::SelectionOperator;
pub use stochastic_universal::StochasticUniversalSampling;
pub use tournament::TournamentSelection;
pub use truncation::TruncationSelection;
