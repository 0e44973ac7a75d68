//! Static product detail page.
//!
//! Every stored string is untrusted and goes through [`escape_html`] before it
//! is placed in markup or an attribute.

use models::product;

/// Escape the five characters that can break out of text or a quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn img_tags(urls: &[String], alt: &str, class: &str) -> String {
    urls.iter()
        .filter(|u| !u.trim().is_empty())
        .map(|u| format!(r#"      <img class="{class}" src="{}" alt="{}">"#, escape_html(u), alt) + "\n")
        .collect()
}

pub fn render_product_page(p: &product::Model) -> String {
    let name = escape_html(&p.name);

    let gallery = if p.images.is_empty() {
        p.image.as_ref().map(|u| img_tags(std::slice::from_ref(u), &name, "product-image")).unwrap_or_default()
    } else {
        img_tags(p.images.as_slice(), &name, "product-image")
    };

    let description = p
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .or(p.mini_description.as_deref())
        .map(escape_html)
        .unwrap_or_default();

    let category = p.category.as_deref().map(escape_html).unwrap_or_default();
    let pictures = img_tags(p.description_pictures.as_slice(), &name, "description-picture");

    let reviews: String = p
        .reviews
        .entries()
        .into_iter()
        .map(|(customer, review)| {
            format!(
                "      <li><strong>{}</strong> {}</li>\n",
                escape_html(customer),
                escape_html(review)
            )
        })
        .collect();
    let reviews_section = if reviews.is_empty() {
        String::new()
    } else {
        format!("    <section class=\"reviews\">\n      <h2>Reviews</h2>\n      <ul>\n{reviews}      </ul>\n    </section>\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{name}</title>
  </head>
  <body>
    <main class="product">
    <h1>{name}</h1>
    <div class="gallery">
{gallery}    </div>
    <p class="description">{description}</p>
    <p class="price">Price: ${price:.2}</p>
    <p class="category">Category: {category}</p>
    <div class="description-pictures">
{pictures}    </div>
{reviews_section}    </main>
  </body>
</html>
"#,
        price = p.price,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::product::{Draft, Reviews};
    use uuid::Uuid;

    fn model(draft: Draft) -> product::Model {
        draft.into_model(Uuid::new_v4(), chrono::Utc::now().into())
    }

    fn base() -> Draft {
        Draft {
            name: "Mug".into(),
            price: 10.0,
            category: Some("kitchen".into()),
            images: (0..5).map(|i| format!("https://cdn.example.com/{i}.jpg")).collect(),
            description_pictures: (0..3).map(|i| format!("https://cdn.example.com/d{i}.jpg")).collect(),
            ..Draft::default()
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#x27;y&#x27;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn renders_core_fields() {
        let html = render_product_page(&model(Draft { description: Some("Stoneware".into()), ..base() }));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Mug</title>"));
        assert!(html.contains("<h1>Mug</h1>"));
        assert!(html.contains("Price: $10.00"));
        assert!(html.contains("Category: kitchen"));
        assert!(html.contains("Stoneware"));
        assert_eq!(html.matches(r#"class="product-image""#).count(), 5);
        assert_eq!(html.matches(r#"class="description-picture""#).count(), 3);
        assert!(!html.contains("Reviews"));
    }

    #[test]
    fn stored_text_cannot_inject_markup() {
        let html = render_product_page(&model(Draft {
            name: "<script>alert(1)</script>".into(),
            description: Some("<b>bold</b>".into()),
            images: vec![r#"x" onerror="alert(1)"#.into()],
            ..base()
        }));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"src="x&quot; onerror=&quot;alert(1)""#));
    }

    #[test]
    fn falls_back_to_single_image_and_mini_description() {
        let html = render_product_page(&model(Draft {
            image: Some("https://cdn.example.com/only.jpg".into()),
            images: vec![],
            mini_description: Some("Short".into()),
            ..base()
        }));
        assert_eq!(html.matches(r#"class="product-image""#).count(), 1);
        assert!(html.contains("https://cdn.example.com/only.jpg"));
        assert!(html.contains(r#"<p class="description">Short</p>"#));
    }

    #[test]
    fn lists_filled_reviews() {
        let reviews = Reviews {
            customer1: Some("Ann".into()),
            review1: Some("Love it & more".into()),
            ..Reviews::default()
        };
        let html = render_product_page(&model(Draft { reviews, ..base() }));
        assert!(html.contains("<h2>Reviews</h2>"));
        assert!(html.contains("<li><strong>Ann</strong> Love it &amp; more</li>"));
    }
}
