//! Siren browsing example
//!
//! Fetches an entity and prints its links, actions and embedded entities.
//! When `ACTION` is set, that action is submitted with the `key=value` pairs
//! given after the URL.
//!
//! Run with: cargo run --example browse -- http://localhost:8080/orders/42 [key=value ...]

use siren_http::{ClientConfig, Entity, Properties, SirenClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .ok_or("usage: browse <url> [key=value ...]")?;

    let client = SirenClient::with_config(ClientConfig {
        enable_logging: true,
        ..Default::default()
    });

    let entity = client.get(&url).await?;
    print_entity(&entity, 0);

    if let Ok(name) = std::env::var("ACTION") {
        let action = entity
            .action(&name)
            .ok_or_else(|| format!("no action named {name:?}"))?;

        let mut data = Properties::new();
        for pair in args {
            if let Some((key, value)) = pair.split_once('=') {
                data.insert(key.to_string(), value.into());
            }
        }

        println!("\nSubmitting {} {} ...", action.method(), action.href);
        let result = client.submit(action, &data).await?;
        match result.location() {
            Some(location) => println!("status {} (location: {location})", result.status()),
            None => println!("status {}", result.status()),
        }
        print_entity(&result, 0);
    }

    Ok(())
}

fn print_entity(entity: &Entity, depth: usize) {
    let pad = "  ".repeat(depth);
    println!("{pad}class: {:?}", entity.class);
    if let Some(title) = &entity.title {
        println!("{pad}title: {title}");
    }
    for (key, value) in &entity.properties {
        println!("{pad}  {key} = {value}");
    }
    for link in &entity.links {
        let rels: Vec<&str> = link.rel.iter().map(|r| r.as_str()).collect();
        println!("{pad}link [{}] -> {}", rels.join(", "), link.href);
    }
    for action in &entity.actions {
        let fields: Vec<&str> = action.fields.iter().map(|f| f.name.as_str()).collect();
        println!(
            "{pad}action {} ({} {} as {}) fields: {}",
            action.name,
            action.method(),
            action.href,
            action.media_type(),
            fields.join(", ")
        );
    }
    for embedded in &entity.entities {
        let rels: Vec<&str> = embedded.rel.iter().map(|r| r.as_str()).collect();
        match &embedded.href {
            Some(href) => println!("{pad}embedded link [{}] -> {href}", rels.join(", ")),
            None => {
                println!("{pad}embedded [{}]", rels.join(", "));
                print_entity(embedded, depth + 1);
            }
        }
    }
}
