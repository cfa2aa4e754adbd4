use mealdb_browser::{CatalogClient, CatalogError, CatalogService, HttpCatalog, QueryState};
use mockito::{Matcher, Server};

fn catalog_for(server: &Server) -> HttpCatalog {
    CatalogClient::builder()
        .base_url(server.url())
        .build()
        .unwrap()
}

fn ingredient_fields(filled: usize) -> String {
    (1..=20)
        .map(|n| {
            if n <= filled {
                format!(
                    r#""strIngredient{n}": "Ingredient {n}", "strMeasure{n}": "{n} tsp""#
                )
            } else {
                format!(r#""strIngredient{n}": "", "strMeasure{n}": " ""#)
            }
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

const SUMMARY_BODY: &str = r#"{
    "meals": [
        {"strMeal": "Baked salmon with fennel & tomatoes", "strMealThumb": "https://www.themealdb.com/images/media/meals/1548772327.jpg", "idMeal": "52959"},
        {"strMeal": "Cajun spiced fish tacos", "strMealThumb": "https://www.themealdb.com/images/media/meals/uvuyxu1503067369.jpg", "idMeal": "52819"}
    ]
}"#;

#[tokio::test]
async fn test_list_categories() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "categories": [
                    {"idCategory": "1", "strCategory": "Beef", "strCategoryThumb": "https://www.themealdb.com/images/category/beef.png", "strCategoryDescription": "Beef is the culinary name for meat from cattle."},
                    {"idCategory": "2", "strCategory": "Chicken", "strCategoryThumb": "", "strCategoryDescription": ""}
                ]
            }"#,
        )
        .create_async()
        .await;

    let categories = catalog_for(&server).list_categories().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, "1");
    assert_eq!(categories[0].name, "Beef");
    assert!(categories[0].description.is_some());
    assert_eq!(categories[1].name, "Chicken");
    assert!(categories[1].thumbnail_url.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_areas() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/list.php")
        .match_query(Matcher::UrlEncoded("a".into(), "list".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": [{"strArea": "American"}, {"strArea": "British"}, {"strArea": "Thai"}]}"#)
        .create_async()
        .await;

    let areas = catalog_for(&server).list_areas().await.unwrap();

    let names: Vec<&str> = areas.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["American", "British", "Thai"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_category_filter_only_hits_category_endpoint() {
    let mut server = Server::new_async().await;
    let category = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("c".into(), "Seafood".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SUMMARY_BODY)
        .create_async()
        .await;
    let by_name = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut state = QueryState::with_term("chicken");
    state.select_category("Seafood");
    let recipes = catalog_for(&server).search(&state).await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].id, "52959");
    assert_eq!(recipes[1].name, "Cajun spiced fish tacos");
    category.assert_async().await;
    by_name.assert_async().await;
}

#[tokio::test]
async fn test_area_filter_hits_area_endpoint() {
    let mut server = Server::new_async().await;
    let area = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("a".into(), "Canadian".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SUMMARY_BODY)
        .create_async()
        .await;

    let recipes = catalog_for(&server)
        .search(&QueryState::with_area("Canadian"))
        .await
        .unwrap();

    assert_eq!(recipes.len(), 2);
    area.assert_async().await;
}

#[tokio::test]
async fn test_empty_term_is_passed_through() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SUMMARY_BODY)
        .create_async()
        .await;

    let recipes = catalog_for(&server)
        .search(&QueryState::default())
        .await
        .unwrap();

    assert_eq!(recipes.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_with_no_matches_is_empty() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "chicken".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let recipes = catalog_for(&server)
        .search(&QueryState::with_term("chicken"))
        .await
        .unwrap();

    assert!(recipes.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_detail_flattens_ingredients() {
    let mut server = Server::new_async().await;
    let body = format!(
        r#"{{
            "meals": [{{
                "idMeal": "52771",
                "strMeal": "Spicy Arrabiata Penne",
                "strCategory": "Vegetarian",
                "strArea": "Italian",
                "strInstructions": "Bring a large pot of water to a boil. Add kosher salt. Drain.",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
                "strTags": "Pasta,Curry",
                "strYoutube": "https://www.youtube.com/watch?v=1IszT_guI08",
                "strSource": null,
                {}
            }}]
        }}"#,
        ingredient_fields(7)
    );
    let mock = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52771".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let detail = catalog_for(&server).get_detail("52771").await.unwrap();

    assert_eq!(detail.id, "52771");
    assert_eq!(detail.name, "Spicy Arrabiata Penne");
    assert_eq!(detail.ingredients.len(), 7);
    assert_eq!(detail.ingredients[0].name, "Ingredient 1");
    assert_eq!(detail.ingredients[0].measure, "1 tsp");
    assert_eq!(detail.ingredients[6].name, "Ingredient 7");
    assert_eq!(
        detail.youtube_url.as_deref(),
        Some("https://www.youtube.com/watch?v=1IszT_guI08")
    );
    assert_eq!(detail.area.as_deref(), Some("Italian"));
    assert!(detail.source_url.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_detail_not_found() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "99999".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let result = catalog_for(&server).get_detail("99999").await;

    match result {
        Err(CatalogError::NotFoundError(id)) => assert_eq!(id, "99999"),
        other => panic!("Expected NotFoundError, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/categories.php")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let result = catalog_for(&server).list_categories().await;
    assert!(matches!(result, Err(CatalogError::NetworkError(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on port 1
    let catalog = CatalogClient::builder()
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let result = catalog.list_areas().await;
    assert!(matches!(result, Err(CatalogError::NetworkError(_))));
}

#[tokio::test]
async fn test_html_body_is_parse_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Maintenance</body></html>")
        .create_async()
        .await;

    let result = catalog_for(&server)
        .search(&QueryState::with_term("pie"))
        .await;
    assert!(matches!(result, Err(CatalogError::ParseError(_))));
}

#[tokio::test]
async fn test_missing_meals_key_is_parse_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/list.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"areas": []}"#)
        .create_async()
        .await;

    let result = catalog_for(&server).list_areas().await;
    assert!(matches!(result, Err(CatalogError::ParseError(_))));
}
