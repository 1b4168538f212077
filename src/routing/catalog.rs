//! Built-in route catalog.
//!
//! The blog's article routes, declared as source-embedded literals. Used
//! whenever the configuration supplies no routes of its own.

use crate::routing::table::{RouteTable, RouteTableBuilder, TableError};

/// The published articles: request path → content resource.
pub const BLOG_ROUTES: [(&str, &str); 15] = [
    ("one-line-a-day", "OneLineADay"),
    (
        "chain-of-responsibility-adopted-for-dependency-injection",
        "ChainOfResponsibilityForDependencyInjection",
    ),
    (
        "the-purpose-of-the-repository-pattern",
        "PurposeOfTheRepositoryPattern",
    ),
    ("things-to-remember-with-blazor", "ThingsToRememberWithBlazor"),
    (
        "minimizing-javascript-interop-in-blazor",
        "MinimizingJavaScriptInteropInBlazor",
    ),
    ("your-application-is-not-blazor", "YourApplicationIsNotBlazor"),
    ("blazor-hosting-models", "BlazorHostingModels"),
    (
        "embracing-component-architecture",
        "EmbracingComponentArchitecture",
    ),
    (
        "just-because-you-can-does-not-mean-you-should",
        "JustBecauseYouCanDoesNotMeanYouShould",
    ),
    (
        "routing-with-variables-in-blazor",
        "RoutingWithVariablesInBlazor",
    ),
    (
        "refactoring-form-inputs-in-blazor",
        "RefactoringFormInputsInBlazor",
    ),
    ("using-sass-in-asp-net-core", "UsingSassInAspNetCore"),
    (
        "blazor-in-memory-state-management-1-3",
        "BlazorInMemoryStateManagementPartOneOfThree",
    ),
    (
        "blazor-in-memory-state-management-2-3",
        "BlazorInMemoryStateManagementPartTwoOfThree",
    ),
    (
        "blazor-in-memory-state-management-3-3",
        "BlazorInMemoryStateManagementPartThreeOfThree",
    ),
];

/// Build the route table for the built-in catalog.
pub fn builtin_table() -> Result<RouteTable, TableError> {
    let mut builder = RouteTableBuilder::new();
    for (path, resource) in BLOG_ROUTES {
        builder.register(path, resource)?;
    }
    Ok(builder.build())
}
