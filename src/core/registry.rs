use crate::core::abstract_factory::AbstractFactoryPlayground;
use crate::core::builder::BuilderPlayground;
use crate::core::factory::FactoryPlayground;
use crate::core::prototype::PrototypePlayground;
use crate::core::solid::SolidPlayground;
use crate::domain::model::PlaygroundInfo;
use crate::domain::ports::Playground;
use crate::utils::error::{PlaygroundError, Result};

pub const ALL: &str = "all";

/// Every playground, in the order `all` runs them.
pub fn all_playgrounds() -> Vec<Box<dyn Playground>> {
    vec![
        Box::new(BuilderPlayground),
        Box::new(FactoryPlayground),
        Box::new(AbstractFactoryPlayground),
        Box::new(PrototypePlayground),
        Box::new(SolidPlayground),
    ]
}

pub fn find_playground(name: &str) -> Result<Box<dyn Playground>> {
    all_playgrounds()
        .into_iter()
        .find(|p| p.name() == name)
        .ok_or_else(|| PlaygroundError::UnknownPlayground {
            name: name.to_string(),
        })
}

/// 解析 CLI 選擇：單一名稱或 `all`
pub fn select(name: &str) -> Result<Vec<Box<dyn Playground>>> {
    let name = name.trim().to_lowercase();
    if name == ALL {
        return Ok(all_playgrounds());
    }
    Ok(vec![find_playground(&name)?])
}

pub fn list_playgrounds() -> Vec<PlaygroundInfo> {
    all_playgrounds().iter().map(|p| p.info()).collect()
}

pub fn list_playgrounds_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&list_playgrounds())?)
}
