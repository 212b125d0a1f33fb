mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod loader;
pub use loader::{Loader, LoaderSize};

mod pokemon_grid;
pub use pokemon_grid::PokemonGridView;

mod pokemon_detail;
pub use pokemon_detail::PokemonDetailView;

mod inventory;
pub use inventory::InventoryView;

mod statistics;
pub use statistics::StatisticsView;
