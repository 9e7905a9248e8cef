//! Catalog commands - browsing, category filtering, product detail and search.

use super::parse_id;
use crate::{
    core::{SearchOutcome, SortOrder},
    shell::{ShellData, format},
};

/// `list [sort]` - all products, optionally sorted.
pub fn list(data: &ShellData, args: &str) -> String {
    let order = if args.is_empty() {
        SortOrder::default()
    } else {
        match args.parse::<SortOrder>() {
            Ok(order) => order,
            Err(_) => {
                let options: Vec<&str> = SortOrder::ALL.iter().map(|(_, name)| *name).collect();
                return format!(
                    "❌ Unknown sort '{args}'. Choose one of: {}",
                    options.join(", ")
                );
            }
        }
    };

    let settings = &data.settings;
    format!(
        "All Plants (sorted by {order})\n{}",
        format::product_list(
            data.catalog.sorted(order),
            &settings.currency,
            settings.low_stock_threshold,
            "No plants available.",
        )
    )
}

/// `top` - the "Top Selling" section.
pub fn top(data: &ShellData) -> String {
    let settings = &data.settings;
    format!(
        "Top Selling\n{}",
        format::product_list(
            data.catalog.top_selling(),
            &settings.currency,
            settings.low_stock_threshold,
            "No plants available.",
        )
    )
}

/// `trendy` - the "Trendy Plants" section.
pub fn trendy(data: &ShellData) -> String {
    let settings = &data.settings;
    format!(
        "Trendy Plants\n{}",
        format::product_list(
            data.catalog.trendy(),
            &settings.currency,
            settings.low_stock_threshold,
            "No plants available.",
        )
    )
}

/// `categories` - the category directory.
pub fn categories(data: &ShellData) -> String {
    format!(
        "Shop by Category\n{}",
        format::category_list(data.catalog.categories())
    )
}

/// `category <tag>` - products in one category.
pub fn category(data: &ShellData, args: &str) -> String {
    if args.is_empty() {
        return "❌ Missing category. Type `categories` to see them all.".to_string();
    }

    let heading = data
        .catalog
        .category(args)
        .map_or_else(|| args.to_string(), |c| c.name.clone());
    let settings = &data.settings;
    format!(
        "{heading}\n{}",
        format::product_list(
            data.catalog.get_by_category(args),
            &settings.currency,
            settings.low_stock_threshold,
            "No plants found in this category.",
        )
    )
}

/// `show <id>` - the product detail overlay.
pub fn show(data: &ShellData, args: &str) -> String {
    let id = match parse_id(args.split_whitespace().next()) {
        Ok(id) => id,
        Err(message) => return message,
    };

    match data.catalog.product(id) {
        Ok(product) => format::product_detail(
            product,
            &data.settings.currency,
            data.settings.low_stock_threshold,
        ),
        Err(e) => format!("❌ {e}"),
    }
}

/// `search <text>` - debounced free-text search.
pub async fn search(data: &ShellData, args: &str) -> String {
    if args.trim().is_empty() {
        return format!(
            "Popular searches: {}",
            data.catalog.popular_searches().join(", ")
        );
    }

    match data.search.submit(args).await {
        SearchOutcome::Results(results) => {
            let settings = &data.settings;
            format::product_list(
                &results,
                &settings.currency,
                settings.low_stock_threshold,
                &format!("No products found for \"{args}\"."),
            )
        }
        SearchOutcome::Superseded => String::new(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::StoreSettings, test_utils::seeded_catalog};
    use std::sync::Arc;

    fn session() -> ShellData {
        let settings = StoreSettings {
            search_debounce_ms: 0,
            ..StoreSettings::default()
        };
        ShellData::new(settings, Arc::new(seeded_catalog()))
    }

    #[test]
    fn test_list_sorted() {
        let data = session();
        let text = list(&data, "price-low");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("All Plants (sorted by price-low)"));
        assert!(lines.next().unwrap().starts_with("[12] String of Pearls"));

        assert!(list(&data, "cheapest").starts_with("❌ Unknown sort 'cheapest'"));
    }

    #[test]
    fn test_sections_and_categories() {
        let data = session();
        assert_eq!(top(&data).lines().count(), 7);
        assert!(trendy(&data).contains("[7] Alocasia Zebrina"));
        assert!(categories(&data).contains("Pet Friendly (pet-friendly)"));
    }

    #[test]
    fn test_category_filter() {
        let data = session();
        let text = category(&data, "succulent");
        assert!(text.starts_with("Succulents\n"));
        assert!(text.contains("Snake Plant"));
        assert!(!text.contains("Monstera"));

        assert!(category(&data, "outdoor").ends_with("No plants found in this category."));
        assert!(category(&data, "").starts_with("❌"));
    }

    #[test]
    fn test_show_product() {
        let data = session();
        let text = show(&data, "9");
        assert!(text.starts_with("**Philodendron Pink Princess**"));
        assert!(text.contains("Only 3 left"));
        assert!(text.contains("20% off"));

        assert_eq!(show(&data, "99"), "❌ Product not found: 99");
        assert!(show(&data, "abc").starts_with("❌"));
    }

    #[tokio::test]
    async fn test_search_command() {
        let data = session();
        assert!(search(&data, "").await.starts_with("Popular searches: Monstera"));
        assert!(search(&data, "zebra").await.contains("Alocasia Zebrina"));
        assert_eq!(
            search(&data, "cactus").await,
            "No products found for \"cactus\"."
        );
    }
}
