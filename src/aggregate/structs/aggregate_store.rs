use parking_lot::RwLock;
use crate::aggregate::structs::aggregates::Aggregates;

#[derive(Debug, Default)]
pub struct AggregateStore {
    pub(crate) aggregates: RwLock<Aggregates>,
}
