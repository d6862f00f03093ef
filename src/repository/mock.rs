use mockall::mock;

use super::{RepositoryResult, TagReader, TagWriter};
use crate::domain::tag::{NewTag, Tag, TagFilter, TagListQuery, UpdateTag};

mock! {
    pub TagRepository {}

    impl TagReader for TagRepository {
        fn list_tags(&self, query: &TagListQuery) -> RepositoryResult<Vec<Tag>>;
        fn count_tags(&self, filter: &TagFilter) -> RepositoryResult<usize>;
        fn tag_exists_by_name(&self, name: &str) -> RepositoryResult<bool>;
        fn tag_exists_by_id(&self, id: i32) -> RepositoryResult<bool>;
    }

    impl TagWriter for TagRepository {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
        fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
    }
}
