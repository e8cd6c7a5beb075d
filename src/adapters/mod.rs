// Adapters layer: concrete implementations of the domain ports. The only
// shipped backend is the in-memory document used by the CLI harness and
// the tests; a real host page supplies its own TextField/Document impls.

pub mod memory;
