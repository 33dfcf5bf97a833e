//! Sample data for fresh databases
//!
//! Restaurants and pizzas have no HTTP creation endpoint, so a new
//! deployment can be populated from here.

use tracing::info;

use crate::domain::{
    DomainResult, NewPizza, NewRestaurant, NewRestaurantPizza, RepositoryProvider,
};

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const MENU: &[(usize, usize, i32)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

/// Insert the sample data when both restaurants and pizzas are empty.
///
/// Returns `true` when rows were inserted.
pub async fn seed_sample_data(repos: &dyn RepositoryProvider) -> DomainResult<bool> {
    if repos.restaurants().count().await? > 0 || repos.pizzas().count().await? > 0 {
        info!("Database already populated, skipping seed");
        return Ok(false);
    }

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        restaurants.push(
            repos
                .restaurants()
                .save(NewRestaurant::new(*name, *address))
                .await?,
        );
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        pizzas.push(repos.pizzas().save(NewPizza::new(*name, *ingredients)).await?);
    }

    for &(r, p, price) in MENU {
        repos
            .restaurant_pizzas()
            .create(NewRestaurantPizza {
                price,
                pizza_id: pizzas[p].id,
                restaurant_id: restaurants[r].id,
            })
            .await?;
    }

    info!(
        "Seeded {} restaurants, {} pizzas, {} restaurant pizzas",
        restaurants.len(),
        pizzas.len(),
        MENU.len()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{memory_db, repos};

    #[tokio::test]
    async fn seeds_once() {
        let repos = repos(memory_db().await);

        assert!(seed_sample_data(&repos).await.unwrap());
        assert!(!seed_sample_data(&repos).await.unwrap());

        assert_eq!(repos.restaurants().count().await.unwrap(), 3);
        assert_eq!(repos.pizzas().count().await.unwrap(), 3);
        assert_eq!(repos.restaurant_pizzas().count().await.unwrap(), 3);
    }
}
