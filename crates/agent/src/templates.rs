//! French reply templates
//!
//! Texts embed light HTML (`<strong>`, `<br>`) rendered by the web widget.

pub const GREETINGS: [&str; 3] = [
    "Bonjour ! 😊 Bienvenue sur ShopAI. Comment puis-je vous aider ?",
    "Salut ! 👋 Je suis votre assistant IA. Que recherchez-vous ?",
    "Hello ! 🌟 Prêt à vous aider. Que puis-je faire pour vous ?",
];
pub const GREETING_SUGGESTIONS: [&str; 3] =
    ["Voir les produits", "Recommandations", "Mes commandes"];

pub const THANKS: [&str; 3] = [
    "De rien ! 😊 N'hésitez pas si vous avez d'autres questions !",
    "Avec plaisir ! 🌟 Je suis là 24/7 pour vous aider.",
    "Merci à vous ! 😄 Bons achats sur ShopAI !",
];
pub const THANKS_SUGGESTIONS: [&str; 3] = ["Voir produits", "Accueil", "Autre question"];

pub const PRODUCT_SEARCH_ALL: &str = "🔍 Voici nos produits disponibles :";
pub const PRODUCT_SEARCH_SUGGESTIONS: [&str; 3] =
    ["Plus de produits", "Filtrer par prix", "Autres catégories"];

pub fn product_search_in(category: &str) -> String {
    format!("🔍 Voici les produits en <strong>{}</strong> :", category)
}

pub const CATEGORY_MENU: &str = "📂 <strong>Nos catégories :</strong><br>• 📱 Électronique<br>• 🎧 Accessoires<br>• 🏠 Maison<br>• 👕 Mode<br>• ⚽ Sports<br>• 💄 Beauté";
pub const CATEGORY_MENU_SUGGESTIONS: [&str; 3] = ["Électronique", "Accessoires", "Mode"];

pub fn category_header(category: &str) -> String {
    format!(
        "📂 <strong>Catégorie {}</strong><br>Découvrez notre sélection :",
        category
    )
}

pub const RECOMMENDATION: &str =
    "💡 <strong>Recommandations personnalisées</strong><br>Voici nos produits les mieux notés :";
pub const RECOMMENDATION_SUGGESTIONS: [&str; 3] = ["Voir plus", "Promotions", "Nouveautés"];

pub const ORDER_STATUS: &str = "📦 <strong>Vos commandes récentes :</strong><br><br>\
• Commande #12458 - En cours de livraison 🚚<br>\
• Commande #12445 - Livrée ✅<br><br>\
Voulez-vous plus de détails ?";
pub const ORDER_STATUS_SUGGESTIONS: [&str; 3] =
    ["Détails commande", "Suivre livraison", "Historique"];

pub const DELIVERY_TRACKING: &str = "🚚 <strong>Suivi de livraison</strong><br><br>\
📦 Commande #12458<br>\
📍 Statut: En transit<br>\
🏢 Centre de distribution Casablanca<br>\
📅 Livraison prévue: Demain avant 18h";
pub const DELIVERY_TRACKING_SUGGESTIONS: [&str; 3] =
    ["Détails", "Contacter livreur", "Autre commande"];

pub const PROMOTIONS: &str = "💰 <strong>Promotions actuelles :</strong><br>🔥 -20% sur l'électronique<br>🎁 Livraison gratuite dès 500 MAD";
pub const PRICE_SUGGESTIONS: [&str; 3] = ["Moins de 500 MAD", "Moins de 1000 MAD", "Promotions"];

pub fn products_under(max_price: u64) -> String {
    format!("💰 Produits à moins de {} MAD :", max_price)
}

pub const HELP: &str = "🤝 <strong>Comment puis-je vous aider ?</strong><br><br>\
🔍 Rechercher des produits<br>\
📂 Explorer les catégories<br>\
💡 Obtenir des recommandations<br>\
📦 Suivre vos commandes<br>\
💳 Infos paiement & livraison";
pub const HELP_SUGGESTIONS: [&str; 3] = ["Produits", "Commandes", "Paiement"];

pub const PAYMENT: &str = "💳 <strong>Modes de paiement :</strong><br><br>\
• Carte bancaire (Visa, Mastercard)<br>\
• PayPal<br>\
• Paiement à la livraison<br>\
• Virement bancaire<br><br>\
🔒 Paiements 100% sécurisés";
pub const PAYMENT_SUGGESTIONS: [&str; 3] = ["Carte bancaire", "PayPal", "À la livraison"];

pub const RETURN: &str = "🔄 <strong>Politique de retour :</strong><br><br>\
✅ Retour gratuit sous 30 jours<br>\
✅ Remboursement sous 5-7 jours<br>\
✅ Échange possible<br><br>\
Avez-vous un produit à retourner ?";
pub const RETURN_SUGGESTIONS: [&str; 3] = ["Retourner un produit", "Conditions", "Contact"];

pub const UNKNOWN: &str = "🤔 Je ne suis pas sûr de comprendre. Voici ce que je peux faire :<br><br>\
• 🔍 Rechercher des produits<br>\
• 📂 Explorer les catégories<br>\
• 💡 Recommandations<br>\
• 📦 Suivre commandes";
pub const UNKNOWN_SUGGESTIONS: [&str; 3] = ["Produits", "Aide", "Catégories"];
