//! Interactive storefront surface.
//!
//! A line-oriented prompt over one [`StorefrontSession`]: list the catalog,
//! manage the cart, jump between sections. This binary *is* the presentation
//! layer, so "scrolling" to a section means printing its banner.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use farmstand_catalog::Catalog;
use farmstand_core::ProductId;
use farmstand_session::{CartView, StorefrontSession};

fn main() -> anyhow::Result<()> {
    farmstand_observability::init();

    let catalog = Arc::new(Catalog::builtin());
    let mut session = StorefrontSession::new(catalog);
    tracing::info!(products = session.catalog().len(), "catalog loaded");

    println!("farmstand — fresh goods, straight from the pantry");
    println!("type `help` for commands");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match run_command(&mut session, input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            }
            Err(err) => println!("error: {err}"),
        }
    }

    Ok(())
}

fn run_command(session: &mut StorefrontSession, input: &str) -> anyhow::Result<String> {
    let mut words = input.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    match (command, args.as_slice()) {
        ("help", []) => Ok(HELP.to_string()),
        ("catalog", []) | ("ls", []) => Ok(render_catalog(session.catalog())),
        ("add", [id]) => {
            let id: ProductId = id.parse()?;
            session.add_to_cart(id)?;
            Ok(render_cart(&session.view()))
        }
        ("remove", [id]) => {
            let id: ProductId = id.parse()?;
            session.remove_from_cart(id)?;
            Ok(render_cart(&session.view()))
        }
        ("qty", [id, quantity]) => {
            let id: ProductId = id.parse()?;
            let quantity: i64 = quantity
                .parse()
                .map_err(|_| anyhow::anyhow!("quantity must be an integer"))?;
            session.set_quantity(id, quantity)?;
            Ok(render_cart(&session.view()))
        }
        ("cart", []) => Ok(render_cart(&session.view())),
        ("json", []) => Ok(serde_json::to_string_pretty(&session.view())?),
        ("go", [anchor]) => Ok(match session.navigate_to(anchor) {
            Some(section) => format!("— {} —", section.anchor()),
            // Unknown sections are a silent no-op.
            None => String::new(),
        }),
        ("checkout", []) => {
            let summary = session.checkout()?;
            Ok(format!(
                "order summary:\n{}\nhand this cart to a human at the till — online ordering is not part of this storefront",
                render_cart(&summary)
            ))
        }
        _ => Ok(format!("unknown command: {input} (try `help`)")),
    }
}

const HELP: &str = "\
commands:
  catalog            list all products
  add <id>           add one unit of a product to the cart
  remove <id>        remove a product from the cart
  qty <id> <n>       set a product's quantity (0 removes it)
  cart               show the cart
  json               show the cart as JSON
  go <section>       jump to a section (home, catalog, about, delivery, contacts)
  checkout           review the order summary
  quit               leave";

fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        out.push_str(&format!("{category}\n"));
        for product in catalog.by_category(category) {
            out.push_str(&format!(
                "  [{}] {} — {}  ({})\n",
                product.id, product.name, product.price, product.description
            ));
        }
    }
    out.pop();
    out
}

fn render_cart(view: &CartView) -> String {
    if view.is_empty() {
        return "cart is empty".to_string();
    }

    let mut out = String::new();
    for line in &view.lines {
        out.push_str(&format!(
            "  {} x{} — {}\n",
            line.name, line.quantity, line.subtotal
        ));
    }
    out.push_str(&format!("  {} item(s), total {}", view.badge, view.total));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> StorefrontSession {
        StorefrontSession::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn add_then_cart_shows_the_line_and_total() {
        let mut session = session();
        run_command(&mut session, "add 1").unwrap();
        let out = run_command(&mut session, "cart").unwrap();
        assert!(out.contains("Linden Honey x1"));
        assert!(out.contains("total 350"));
    }

    #[test]
    fn qty_zero_empties_the_cart() {
        let mut session = session();
        run_command(&mut session, "add 1").unwrap();
        let out = run_command(&mut session, "qty 1 0").unwrap();
        assert_eq!(out, "cart is empty");
    }

    #[test]
    fn json_renders_the_view() {
        let mut session = session();
        run_command(&mut session, "add 3").unwrap();
        let out = run_command(&mut session, "json").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["total"], 180);
        assert_eq!(parsed["badge"], 1);
    }

    #[test]
    fn go_with_unknown_section_prints_nothing() {
        let mut session = session();
        assert_eq!(run_command(&mut session, "go cellar").unwrap(), "");
        assert_eq!(run_command(&mut session, "go about").unwrap(), "— about —");
    }

    #[test]
    fn malformed_product_id_is_an_error() {
        let mut session = session();
        assert!(run_command(&mut session, "add honey").is_err());
    }
}
