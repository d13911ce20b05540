#![allow(dead_code, unused_imports)]

pub(crate) mod fake_mvn;
pub(crate) mod test_context;
pub(crate) mod zip_fixture;

pub(crate) use fake_mvn::FakeMvn;
pub(crate) use test_context::TestContext;
