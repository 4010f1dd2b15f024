//! Product collection URLs.

use url::Url;

use crate::config::ApiConfig;

/// Builds the collection and filtered-collection URLs for one backend.
#[derive(Debug, Clone)]
pub struct ProductsEndpoint {
    collection: Url,
    filter_param: String,
}

impl ProductsEndpoint {
    pub fn new(base: &Url, products_path: &str, filter_param: &str) -> Self {
        let mut collection = base.clone();
        let path = format!(
            "{}/{}",
            base.path().trim_end_matches('/'),
            products_path.trim_start_matches('/')
        );
        collection.set_path(&path);
        collection.set_query(None);
        collection.set_fragment(None);

        Self {
            collection,
            filter_param: filter_param.to_string(),
        }
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, url::ParseError> {
        let base = Url::parse(&api.base_url)?;
        Ok(Self::new(&base, &api.products_path, &api.filter_param))
    }

    /// `{base}/products`
    pub fn all(&self) -> Url {
        self.collection.clone()
    }

    /// `{base}/products?name_like={query}`, or the unfiltered URL for an empty query.
    pub fn matching(&self, query: &str) -> Url {
        if query.is_empty() {
            return self.all();
        }
        let mut url = self.collection.clone();
        url.query_pairs_mut().append_pair(&self.filter_param, query);
        url
    }
}
