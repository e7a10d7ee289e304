//! Dialogue policy
//!
//! One branch per intent. Branches that show products query the catalog
//! once and degrade to an empty list when the lookup fails.

use std::sync::Arc;

use shop_agent_core::{CatalogClient, CatalogQuery, DialogueReply, EntitySet, Intent, Product};

use crate::selector::{pick, TemplateSelector};
use crate::templates;

pub struct DialoguePolicy {
    catalog: Arc<dyn CatalogClient>,
    selector: Arc<dyn TemplateSelector>,
}

impl DialoguePolicy {
    pub fn new(catalog: Arc<dyn CatalogClient>, selector: Arc<dyn TemplateSelector>) -> Self {
        Self { catalog, selector }
    }

    /// Build the reply for a classified message
    ///
    /// `caller_id` is accepted for the order branches but not used yet;
    /// they answer with illustrative text.
    pub async fn respond(
        &self,
        intent: Intent,
        entities: &EntitySet,
        caller_id: Option<i64>,
    ) -> DialogueReply {
        match intent {
            Intent::Greeting => {
                DialogueReply::new(pick(self.selector.as_ref(), &templates::GREETINGS))
                    .with_suggestions(templates::GREETING_SUGGESTIONS)
            }
            Intent::ProductSearch => self.product_search(entities).await,
            Intent::CategoryBrowse => self.category_browse(entities).await,
            Intent::Recommendation => {
                let products = self.fetch(CatalogQuery::TopRated).await;
                DialogueReply::new(templates::RECOMMENDATION)
                    .with_products(products)
                    .with_suggestions(templates::RECOMMENDATION_SUGGESTIONS)
            }
            Intent::OrderStatus => {
                tracing::debug!(?caller_id, "Order status requested");
                DialogueReply::new(templates::ORDER_STATUS)
                    .with_suggestions(templates::ORDER_STATUS_SUGGESTIONS)
            }
            Intent::DeliveryTracking => {
                tracing::debug!(?caller_id, "Delivery tracking requested");
                DialogueReply::new(templates::DELIVERY_TRACKING)
                    .with_suggestions(templates::DELIVERY_TRACKING_SUGGESTIONS)
            }
            Intent::PriceInquiry => self.price_inquiry(entities).await,
            Intent::Help => {
                DialogueReply::new(templates::HELP).with_suggestions(templates::HELP_SUGGESTIONS)
            }
            Intent::Payment => DialogueReply::new(templates::PAYMENT)
                .with_suggestions(templates::PAYMENT_SUGGESTIONS),
            Intent::Return => DialogueReply::new(templates::RETURN)
                .with_suggestions(templates::RETURN_SUGGESTIONS),
            Intent::Thanks => DialogueReply::new(pick(self.selector.as_ref(), &templates::THANKS))
                .with_suggestions(templates::THANKS_SUGGESTIONS),
            Intent::Unknown => {
                let products = self.fetch(CatalogQuery::TopRated).await;
                DialogueReply::new(templates::UNKNOWN)
                    .with_products(products)
                    .with_suggestions(templates::UNKNOWN_SUGGESTIONS)
            }
        }
    }

    async fn product_search(&self, entities: &EntitySet) -> DialogueReply {
        let (query, text) = match entities.category() {
            Some(category) => (
                CatalogQuery::search(category),
                templates::product_search_in(category),
            ),
            None => (CatalogQuery::All, templates::PRODUCT_SEARCH_ALL.to_string()),
        };

        let products = self.fetch(query).await;
        DialogueReply::new(text)
            .with_products(products)
            .with_suggestions(templates::PRODUCT_SEARCH_SUGGESTIONS)
    }

    async fn category_browse(&self, entities: &EntitySet) -> DialogueReply {
        match entities.category() {
            Some(category) => {
                let products = self.fetch(CatalogQuery::search(category)).await;
                DialogueReply::new(templates::category_header(category)).with_products(products)
            }
            None => DialogueReply::new(templates::CATEGORY_MENU)
                .with_suggestions(templates::CATEGORY_MENU_SUGGESTIONS),
        }
    }

    async fn price_inquiry(&self, entities: &EntitySet) -> DialogueReply {
        let (query, text) = match entities.max_price {
            Some(max) => (CatalogQuery::up_to(max), templates::products_under(max)),
            None => (CatalogQuery::Promotions, templates::PROMOTIONS.to_string()),
        };

        let products = self.fetch(query).await;
        DialogueReply::new(text)
            .with_products(products)
            .with_suggestions(templates::PRICE_SUGGESTIONS)
    }

    /// Single catalog attempt; failures become an empty list
    async fn fetch(&self, query: CatalogQuery) -> Vec<Product> {
        match self.catalog.query(&query).await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(
                    query = query.kind(),
                    error = %e,
                    "Catalog lookup failed, continuing without products"
                );
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for DialoguePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialoguePolicy").finish_non_exhaustive()
    }
}
