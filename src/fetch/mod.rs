//! Network side of a check: following a URL's redirect chain.

mod redirects;

pub use redirects::resolve;

#[cfg(test)]
mod tests;
