#![doc = include_str!("../README.md")]

pub use rdf_scribe_query::render_query;

pub mod model {
    pub use rdf_scribe_model::*;
}

pub mod query {
    pub use rdf_scribe_query::*;
}
