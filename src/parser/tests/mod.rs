//! Unit tests for the filename parsing strategies
