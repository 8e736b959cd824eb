//! Command implementations
//!
//! Each command builds on the client library and prints rendered text to
//! stdout. API failures on the feed path surface as the feed's error state
//! with a retry hint; catalog commands propagate errors to the caller.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};

use cochera_client::config::INDICATOR_DISMISS_AFTER;
use cochera_client::feed::{render_error, render_feed, render_new_activity_banner};
use cochera_client::{
    ActivityWatcher, ApiClient, Config, FeedKind, FeedPager, FeedQuery, FeedTab, NewActivityIndicator,
    NewCar, NewGroup, NewWishlistItem, PageCache, WishPriority,
};

fn build_query(tab: FeedTab, kind: Option<FeedKind>, user: Option<i64>) -> FeedQuery {
    let mut query = FeedQuery::new(tab);
    if let Some(kind) = kind {
        query = query.with_kind(kind);
    }
    if let Some(user) = user {
        query = query.with_target_user(user);
    }
    query
}

pub async fn show_feed(
    client: ApiClient,
    tab: FeedTab,
    kind: Option<FeedKind>,
    user: Option<i64>,
    pages: u32,
) -> Result<()> {
    let pager = FeedPager::new(
        Arc::new(client),
        Arc::new(PageCache::new()),
        build_query(tab, kind, user),
    );

    for _ in 0..pages {
        pager.load_next().await;
        if pager.is_error() || !pager.has_more() {
            break;
        }
    }

    if pager.is_error() {
        print!("{}", render_error(&pager.last_error().unwrap_or_default()));
    } else {
        print!("{}", render_feed(&pager.items(), Utc::now()));
    }
    Ok(())
}

pub async fn watch_feed(
    client: ApiClient,
    config: &Config,
    tab: FeedTab,
    user: Option<i64>,
) -> Result<()> {
    let api = Arc::new(client);
    let query = build_query(tab, None, user);
    let pager = FeedPager::new(api.clone(), Arc::new(PageCache::new()), query.clone());

    pager.load_next().await;
    if pager.is_error() {
        print!("{}", render_error(&pager.last_error().unwrap_or_default()));
    } else {
        print!("{}", render_feed(&pager.items(), Utc::now()));
    }

    let mut watcher = ActivityWatcher::spawn(
        api,
        query,
        pager.top_item_id().unwrap_or(0),
        config.poll_interval,
    );

    println!("(Enter para actualizar, Ctrl-C para salir)");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut rx = watcher.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                watcher.stop();
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                if *rx.borrow_and_update() {
                    print!("{}", render_new_activity_banner());
                    let indicator = NewActivityIndicator::shown_at(Instant::now());
                    tokio::spawn(async move {
                        tokio::time::sleep(INDICATOR_DISMISS_AFTER).await;
                        if !indicator.visible_at(Instant::now()) {
                            println!("(aviso descartado)");
                        }
                    });
                }
            }
            line = lines.next_line() => {
                match line? {
                    Some(_) => {
                        pager.refresh();
                        pager.load_next().await;
                        if pager.is_error() {
                            print!("{}", render_error(&pager.last_error().unwrap_or_default()));
                        } else {
                            print!("{}", render_feed(&pager.items(), Utc::now()));
                            watcher.reset(pager.top_item_id().unwrap_or(0));
                        }
                    }
                    None => break,
                }
            }
        }
    }
    Ok(())
}

// --- Catalog commands ---

pub async fn list_cars(client: ApiClient) -> Result<()> {
    let cars = client.list_cars().await?;
    if cars.is_empty() {
        println!("No tienes vehículos registrados.");
        return Ok(());
    }
    for car in cars {
        let scale = car.scale.as_deref().unwrap_or("-");
        println!("[{}] {} ({})", car.id, car.label(), scale);
    }
    Ok(())
}

pub async fn add_car(
    client: ApiClient,
    name: String,
    brand: Option<String>,
    year: Option<i32>,
    scale: Option<String>,
) -> Result<()> {
    let car = client
        .create_car(&NewCar {
            name,
            brand,
            model_year: year,
            scale,
        })
        .await?;
    println!("Registrado: [{}] {}", car.id, car.label());
    Ok(())
}

pub async fn remove_car(client: ApiClient, id: i64) -> Result<()> {
    client.delete_car(id).await?;
    println!("Vehículo {} eliminado.", id);
    Ok(())
}

pub async fn list_groups(client: ApiClient) -> Result<()> {
    let groups = client.list_groups().await?;
    if groups.is_empty() {
        println!("No tienes grupos.");
        return Ok(());
    }
    for group in groups {
        println!("[{}] {} ({} vehículos)", group.id, group.name, group.car_count);
    }
    Ok(())
}

pub async fn create_group(
    client: ApiClient,
    name: String,
    description: Option<String>,
) -> Result<()> {
    let group = client.create_group(&NewGroup { name, description }).await?;
    println!("Grupo creado: [{}] {}", group.id, group.name);
    Ok(())
}

pub async fn add_car_to_group(client: ApiClient, group_id: i64, car_id: i64) -> Result<()> {
    let group = client.add_car_to_group(group_id, car_id).await?;
    println!(
        "Agregado al grupo {} ({} vehículos).",
        group.name, group.car_count
    );
    Ok(())
}

pub async fn list_wishlist(client: ApiClient) -> Result<()> {
    let items = client.list_wishlist().await?;
    if items.is_empty() {
        println!("Tu lista de deseos está vacía.");
        return Ok(());
    }
    for item in items {
        let status = if item.is_achieved() { "logrado" } else { "pendiente" };
        let priority = item
            .priority
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("[{}] {} ({}, {})", item.id, item.name, priority, status);
    }
    Ok(())
}

pub async fn add_wishlist_item(
    client: ApiClient,
    name: String,
    brand: Option<String>,
    priority: Option<WishPriority>,
) -> Result<()> {
    let item = client
        .create_wishlist_item(&NewWishlistItem {
            name,
            brand,
            priority,
        })
        .await?;
    println!("Agregado a la lista: [{}] {}", item.id, item.name);
    Ok(())
}

pub async fn achieve_wishlist_item(client: ApiClient, id: i64) -> Result<()> {
    let item = client.achieve_wishlist_item(id).await?;
    println!("¡{} conseguido!", item.name);
    Ok(())
}
