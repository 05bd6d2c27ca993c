use crate::application::task::Task;
use crate::model::request::RequestDescriptor;

/// News summary for the portfolio
pub fn portfolio_news() -> Task {
    Task::single(
        "data.portfolio_news",
        RequestDescriptor::get("/api/iserver/news/portfolio"),
    )
}

/// Top news articles
pub fn top_news() -> Task {
    Task::single("data.top_news", RequestDescriptor::get("/api/iserver/news/top"))
}

/// Available news sources
pub fn news_sources() -> Task {
    Task::single(
        "data.news_sources",
        RequestDescriptor::get("/api/iserver/news/sources"),
    )
}

/// News briefings
pub fn news_briefings() -> Task {
    Task::single(
        "data.news_briefings",
        RequestDescriptor::get("/api/iserver/news/briefing"),
    )
}

/// Fundamentals summary of a contract, company description included
pub fn summary(conid: impl ToString) -> Task {
    Task::single(
        "data.summary",
        RequestDescriptor::get(format!(
            "/api/iserver/fundamentals/{}/summary",
            conid.to_string()
        )),
    )
}
