// tests/category_tests.rs
use compass_core::application::commands::categories::{
    CreateCategoryCommand, DeleteCategoryCommand,
};
use compass_core::application::commands::modules::CreateModuleCommand;
use compass_core::application::error::ApplicationError;
use compass_core::application::queries::categories::ListCategoriesQuery;
use compass_core::application::queries::modules::ListModulesQuery;

mod support;

fn category(name: &str, module_type: &str) -> CreateCategoryCommand {
    CreateCategoryCommand {
        name: name.into(),
        module_type: module_type.into(),
    }
}

#[tokio::test]
async fn same_name_in_different_verticals_is_allowed() {
    let ctx = support::build_context();

    ctx.services
        .category_commands
        .create_category(category("Engineering", "study-india"))
        .await
        .unwrap();
    ctx.services
        .category_commands
        .create_category(category("Engineering", "study-abroad"))
        .await
        .unwrap();

    assert_eq!(ctx.categories.len(), 2);
}

#[tokio::test]
async fn duplicate_pair_within_a_vertical_conflicts() {
    let ctx = support::build_context();

    ctx.services
        .category_commands
        .create_category(category("Engineering", "study-india"))
        .await
        .unwrap();

    let err = ctx
        .services
        .category_commands
        .create_category(category("Engineering", "study-india"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)), "got {err:?}");
    assert_eq!(ctx.categories.len(), 1);
}

#[tokio::test]
async fn listing_is_scoped_to_the_vertical_in_insertion_order() {
    let ctx = support::build_context();

    for name in ["Engineering", "Medicine", "Law"] {
        ctx.services
            .category_commands
            .create_category(category(name, "study-india"))
            .await
            .unwrap();
    }
    ctx.services
        .category_commands
        .create_category(category("Visa Help", "immigration"))
        .await
        .unwrap();

    let listed = ctx
        .services
        .category_queries
        .list_categories(ListCategoriesQuery {
            module_type: "study-india".into(),
        })
        .await
        .unwrap();

    let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Engineering", "Medicine", "Law"]);
}

#[tokio::test]
async fn unknown_vertical_is_rejected() {
    let ctx = support::build_context();

    let err = ctx
        .services
        .category_commands
        .create_category(category("Engineering", "study_india"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");

    let err = ctx
        .services
        .category_queries
        .list_categories(ListCategoriesQuery {
            module_type: "day-trading".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let ctx = support::build_context();

    let err = ctx
        .services
        .category_commands
        .create_category(category("  ", "loans"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn deleting_a_category_leaves_referencing_entries_orphaned() {
    let ctx = support::build_context();

    let created = ctx
        .services
        .category_commands
        .create_category(category("Engineering", "study-india"))
        .await
        .unwrap();

    let entry = ctx
        .services
        .module_commands
        .create_module(
            CreateModuleCommand::builder()
                .module_type("study-india")
                .title("IIT Delhi - B.Tech")
                .summary("short teaser")
                .description("full body text")
                .category("Engineering")
                .publish(true)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(entry.category, "Engineering");

    // Categories are advisory labels: deleting one never touches the entries
    // carrying its name.
    ctx.services
        .category_commands
        .delete_category(DeleteCategoryCommand { id: created.id })
        .await
        .unwrap();

    let listed = ctx
        .services
        .module_queries
        .list_modules(ListModulesQuery {
            module_type: "study-india".into(),
            published: Some(true),
            category: Some("Engineering".into()),
        })
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].category, "Engineering");
}

#[tokio::test]
async fn deleting_a_missing_category_is_not_found() {
    let ctx = support::build_context();

    let err = ctx
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand {
            id: "507f1f77bcf86cd799439011".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)), "got {err:?}");
}
