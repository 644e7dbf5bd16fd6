use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{PageMeta, SiteMeta};

/// Title, description, social cards and canonical link for one route.
#[component]
pub fn PageSeo(page: PageMeta) -> impl IntoView {
    let site = use_context::<SiteMeta>().unwrap_or_default();
    let url = site.canonical(page.path);

    view! {
        <Title text=page.title />
        <Meta name="description" content=page.description />

        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=url.clone() />
        <Meta property="og:title" content=page.title />
        <Meta property="og:description" content=page.description />

        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:title" content=page.title />
        <Meta name="twitter:description" content=page.description />

        <Link rel="canonical" href=url />
    }
}
