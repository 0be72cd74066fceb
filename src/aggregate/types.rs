/// `HashMap`/`HashSet` aliases keyed with `ahash`.
pub mod ahash_map;
