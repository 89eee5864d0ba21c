use crate::domain::model::{Breed, Fact};
use crate::utils::error::Result;

/// 具有唯一識別碼的目錄項目
pub trait Entity {
    fn id(&self) -> &str;
    fn featured(&self) -> bool;
}

/// 可以用 slug 導向詳細頁的項目
pub trait Slugged: Entity {
    fn slug(&self) -> &str;
}

/// 全文搜尋會比對的欄位
pub trait Searchable {
    /// 名稱或標題；BreedSort / FactSort 的名稱排序也用這個鍵
    fn title(&self) -> &str;
    fn searchable_text(&self) -> Vec<&str>;
    fn tags(&self) -> &[String];
}

/// 目錄資料的來源 (內嵌種子資料或檔案)
pub trait DatasetSource {
    fn load_breeds(&self) -> Result<Vec<Breed>>;
    fn load_facts(&self) -> Result<Vec<Fact>>;
    fn describe(&self) -> String;
}

impl Entity for Breed {
    fn id(&self) -> &str {
        &self.id
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

impl Slugged for Breed {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Searchable for Breed {
    fn title(&self) -> &str {
        &self.name
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![&self.name, &self.description, &self.origin]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Entity for Fact {
    fn id(&self) -> &str {
        &self.id
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

impl Searchable for Fact {
    fn title(&self) -> &str {
        &self.title
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![&self.title, &self.content]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
