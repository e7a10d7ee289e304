//! End-to-end conversation scenarios through `ChatbotAgent`

use std::sync::Arc;

use shop_agent_agent::testing::{FailingCatalog, StaticCatalog};
use shop_agent_agent::{templates, ChatbotAgent, FixedSelector};
use shop_agent_config::TriggerSet;
use shop_agent_core::{CatalogError, CatalogQuery, Intent, Product};

fn agent_with(catalog: Arc<StaticCatalog>) -> ChatbotAgent {
    ChatbotAgent::new(
        Arc::new(TriggerSet::default()),
        catalog,
        Arc::new(FixedSelector(0)),
    )
}

#[tokio::test]
async fn greeting_has_no_products_key() {
    let catalog = Arc::new(StaticCatalog::new(vec![]));
    let response = agent_with(catalog.clone()).process("Bonjour", None).await;

    assert_eq!(response.analysis.intent, Intent::Greeting);
    assert!((response.analysis.confidence - 0.65).abs() < 1e-9);
    assert!(templates::GREETINGS.contains(&response.text.as_str()));

    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("products").is_none());
    assert!(catalog.queries().is_empty());
}

#[tokio::test]
async fn product_search_queries_the_detected_category() {
    let catalog = Arc::new(StaticCatalog::new(vec![Product::named(1, "Écouteurs Pro")]));
    let response = agent_with(catalog.clone())
        .process("je cherche des écouteurs bluetooth", Some(12))
        .await;

    assert_eq!(response.analysis.intent, Intent::ProductSearch);
    assert_eq!(response.analysis.entities.category(), Some("Électronique"));
    assert_eq!(catalog.queries(), vec![CatalogQuery::search("Électronique")]);
    assert_eq!(response.products.unwrap()[0].name.as_deref(), Some("Écouteurs Pro"));
}

#[tokio::test]
async fn price_question_queries_the_range() {
    let catalog = Arc::new(StaticCatalog::new(vec![]));
    let response = agent_with(catalog.clone())
        .process("produits à moins de 500 mad", None)
        .await;

    assert_eq!(response.analysis.intent, Intent::PriceInquiry);
    assert_eq!(response.analysis.entities.max_price, Some(500));
    assert_eq!(catalog.queries(), vec![CatalogQuery::up_to(500)]);
    assert_eq!(response.text, "💰 Produits à moins de 500 MAD :");
}

#[tokio::test]
async fn gibberish_falls_back_to_top_rated() {
    let catalog = Arc::new(StaticCatalog::new(vec![Product::named(2, "Drone")]));
    let response = agent_with(catalog.clone()).process("asdkjasd", None).await;

    assert_eq!(response.analysis.intent, Intent::Unknown);
    assert_eq!(response.analysis.confidence, 0.3);
    assert_eq!(catalog.queries(), vec![CatalogQuery::TopRated]);
    assert_eq!(response.products.map(|p| p.len()), Some(1));
}

#[tokio::test]
async fn catalog_outage_still_answers() {
    let catalog = Arc::new(FailingCatalog::new(CatalogError::Timeout));
    let agent = ChatbotAgent::new(
        Arc::new(TriggerSet::default()),
        catalog.clone(),
        Arc::new(FixedSelector(0)),
    );

    let response = agent.process("asdkjasd", None).await;
    assert_eq!(response.text, templates::UNKNOWN);
    assert_eq!(response.products, Some(vec![]));
    assert_eq!(catalog.calls(), 1);
}
