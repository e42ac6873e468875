use quickcheck::{Arbitrary, Gen};

/// Valid board parameters for property tests: `1 <= run_length <= size <= 8`.
#[derive(Clone, Debug)]
pub(crate) struct BoardParamsInput {
    pub size: usize,
    pub run_length: usize,
}

impl Arbitrary for BoardParamsInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = usize::arbitrary(g) % 8 + 1;
        let run_length = usize::arbitrary(g) % size + 1;
        BoardParamsInput { size, run_length }
    }
}
