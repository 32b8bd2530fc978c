use crate::app::detail_view::ProductDetailViewState;
use crate::app::search_view::SearchViewState;
use crate::domain::format::{capitalize_condition, format_price};
use crate::domain::model::{Product, ProductDetail};
use crate::domain::ports::PageRequest;
use std::fmt::Write;

pub const NO_RESULTS_TEXT: &str = "Nenhum resultado encontrado para a sua busca.";
pub const LOADING_TEXT: &str = "Carregando...";

fn product_line(index: usize, product: &Product) -> String {
    let mut line = format!(
        "{:>3}. {}\n     {}",
        index,
        product.title,
        format_price(product.price, &product.currency_id)
    );
    if let Some(discount) = product.discount_percent() {
        let _ = write!(line, "  {}% OFF", discount);
    }
    if product.has_free_shipping() {
        line.push_str("  Frete grátis");
    }
    let _ = write!(line, "  [{}]", product.id);
    line
}

pub fn render_search_state(state: &SearchViewState, page: PageRequest) -> String {
    if state.is_loading {
        return LOADING_TEXT.to_string();
    }
    if let Some(message) = &state.error_message {
        return format!("❌ {}", message);
    }
    if state.show_no_results {
        return NO_RESULTS_TEXT.to_string();
    }
    if state.products.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for (i, product) in state.products.iter().enumerate() {
        let _ = writeln!(out, "{}", product_line(page.offset as usize + i + 1, product));
    }
    let _ = write!(
        out,
        "-- resultados {}-{} --",
        page.offset + 1,
        page.offset as usize + state.products.len()
    );
    out
}

pub fn render_product_detail(detail: &ProductDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.title);
    let _ = writeln!(out, "{}", "=".repeat(detail.title.chars().count().max(3)));

    if let Some(original) = detail.original_price.filter(|o| *o > detail.price) {
        let _ = writeln!(
            out,
            "Preço original: {}",
            format_price(original, &detail.currency_id)
        );
    }
    let _ = write!(out, "Preço: {}", format_price(detail.price, &detail.currency_id));
    if let Some(discount) = detail.discount_percent() {
        let _ = write!(out, "  ({}% OFF)", discount);
    }
    out.push('\n');

    let _ = writeln!(out, "Condição: {}", capitalize_condition(&detail.condition));
    if detail.has_free_shipping() {
        let _ = writeln!(out, "Frete grátis");
    }
    let _ = writeln!(out, "Disponíveis: {}", detail.available_quantity);
    let _ = writeln!(out, "Vendidos: {}", detail.sold_quantity);
    if let Some(warranty) = &detail.warranty {
        let _ = writeln!(out, "Garantia: {}", warranty);
    }
    if !detail.pictures.is_empty() {
        let _ = writeln!(out, "Fotos: {}", detail.pictures.len());
        for picture in &detail.pictures {
            let url = if picture.secure_url.is_empty() {
                &picture.url
            } else {
                &picture.secure_url
            };
            let _ = writeln!(out, "  - {}", url);
        }
    }

    if let Some(attributes) = detail.attributes.as_ref().filter(|a| !a.is_empty()) {
        let _ = writeln!(out, "Características:");
        for attribute in attributes {
            let _ = writeln!(
                out,
                "  {}: {}",
                attribute.name,
                attribute.value_name.as_deref().unwrap_or("-")
            );
        }
    }
    out.trim_end().to_string()
}

pub fn render_detail_state(state: &ProductDetailViewState) -> String {
    if state.is_loading {
        return LOADING_TEXT.to_string();
    }
    if let Some(message) = &state.error_message {
        return format!("❌ {}", message);
    }
    state
        .product_detail
        .as_ref()
        .map(render_product_detail)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Attribute, Shipping};

    #[test]
    fn test_render_search_results_numbers_from_offset() {
        let state = SearchViewState {
            products: vec![Product {
                id: "MLA1".into(),
                title: "Camisa Polo".into(),
                price: 89.9,
                original_price: Some(120.0),
                currency_id: "BRL".into(),
                shipping: Some(Shipping {
                    free_shipping: true,
                }),
                ..Default::default()
            }],
            ..Default::default()
        };

        let text = render_search_state(&state, PageRequest { limit: 10, offset: 10 });
        assert!(text.contains(" 11. Camisa Polo"));
        assert!(text.contains("R$ 89,90"));
        assert!(text.contains("25% OFF"));
        assert!(text.contains("Frete grátis"));
        assert!(text.contains("[MLA1]"));
    }

    #[test]
    fn test_render_search_terminal_states() {
        let no_results = SearchViewState {
            show_no_results: true,
            ..Default::default()
        };
        assert_eq!(
            render_search_state(&no_results, PageRequest::default()),
            NO_RESULTS_TEXT
        );

        let error = SearchViewState {
            error_message: Some("Erro interno do servidor".into()),
            ..Default::default()
        };
        assert_eq!(
            render_search_state(&error, PageRequest::default()),
            "❌ Erro interno do servidor"
        );
        assert_eq!(
            render_search_state(&SearchViewState::default(), PageRequest::default()),
            ""
        );
    }

    #[test]
    fn test_render_product_detail() {
        let detail = ProductDetail {
            title: "Notebook".into(),
            price: 2500.0,
            currency_id: "BRL".into(),
            condition: "new".into(),
            warranty: Some("1 ano de garantia do fabricante".into()),
            sold_quantity: 150,
            attributes: Some(vec![Attribute {
                id: "BRAND".into(),
                name: "Marca".into(),
                value_name: None,
            }]),
            ..Default::default()
        };

        let text = render_product_detail(&detail);
        assert!(text.starts_with("Notebook\n"));
        assert!(text.contains("Preço: R$ 2.500,00"));
        assert!(text.contains("Condição: New"));
        assert!(text.contains("Vendidos: 150"));
        assert!(text.contains("Garantia: 1 ano"));
        assert!(text.contains("  Marca: -"));
        assert!(!text.contains("Frete grátis"));
    }
}
