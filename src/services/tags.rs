use serde::Serialize;

use crate::domain::tag::Tag;
use crate::forms::tags::{AddTagForm, DeleteTagForm, EditTagForm, ListTagsForm};
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult};

/// Payload of the tag list endpoint.
#[derive(Debug, Default, Serialize)]
pub struct TagPage {
    /// Tags on the requested page.
    pub lists: Vec<Tag>,
    /// Number of tags matching the filter across all pages.
    pub total: usize,
}

/// Lists one page of tags matching the supplied filters.
///
/// The list and the count run against the same filter. `per_page` comes from
/// the server configuration.
pub fn list_tags<R>(repo: &R, form: ListTagsForm, per_page: usize) -> ServiceResult<TagPage>
where
    R: TagReader + ?Sized,
{
    let query = form.into_list_query(per_page);
    log::debug!("listing tags with {:?}", query);

    let lists = repo.list_tags(&query).map_err(ServiceError::Repository)?;
    let total = repo
        .count_tags(&query.filter)
        .map_err(ServiceError::Repository)?;

    Ok(TagPage { lists, total })
}

/// Creates a tag after checking that no live tag has the same name.
pub fn create_tag<R>(repo: &R, form: AddTagForm) -> ServiceResult<Tag>
where
    R: TagReader + TagWriter + ?Sized,
{
    let new_tag = form.into_new_tag()?;

    if repo
        .tag_exists_by_name(&new_tag.name)
        .map_err(ServiceError::Repository)?
    {
        return Err(ServiceError::Conflict);
    }

    let tag = repo.create_tag(&new_tag)?;
    log::debug!("created tag {} ({})", tag.id, tag.name);

    Ok(tag)
}

/// Applies a merge-patch to an existing tag.
pub fn modify_tag<R>(repo: &R, form: EditTagForm) -> ServiceResult<Tag>
where
    R: TagReader + TagWriter + ?Sized,
{
    let (tag_id, update) = form.into_update_tag()?;

    if !repo
        .tag_exists_by_id(tag_id)
        .map_err(ServiceError::Repository)?
    {
        return Err(ServiceError::NotFound);
    }

    let tag = repo.update_tag(tag_id, &update)?;
    log::debug!("updated tag {tag_id} by {}", update.modified_by);

    Ok(tag)
}

/// Deletes an existing tag.
pub fn remove_tag<R>(repo: &R, form: DeleteTagForm) -> ServiceResult<()>
where
    R: TagReader + TagWriter + ?Sized,
{
    let tag_id = form.into_tag_id()?;

    if !repo
        .tag_exists_by_id(tag_id)
        .map_err(ServiceError::Repository)?
    {
        return Err(ServiceError::NotFound);
    }

    repo.delete_tag(tag_id)?;
    log::debug!("deleted tag {tag_id}");

    Ok(())
}
