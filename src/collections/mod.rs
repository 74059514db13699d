pub mod grid;

pub use self::grid::Grid;

use ahash::RandomState;
use linked_hash_set::LinkedHashSet;

pub type LinkedAHashSet<T> = LinkedHashSet<T, RandomState>;
