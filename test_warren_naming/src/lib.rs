//! System tests for the `warren-naming` crate live under `tests/`.
