#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedSnapshot {
    pub save_point: Vec<u8>,
    pub visitors: Vec<u8>,
}
