//! Test infrastructure backed by real containers.
