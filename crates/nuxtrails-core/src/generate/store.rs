//! Pinia store generation
//!
//! One store module per model. Mutating actions issue the write and then
//! re-fetch the full collection instead of patching local state: an extra
//! round trip per mutation buys resynchronization with the server.

use super::fileset::GeneratedFileSet;
use crate::model::ModelSpec;

/// Build `stores/<slug>.ts` for one model
pub fn file_set(spec: &ModelSpec) -> GeneratedFileSet {
    let slug = &spec.table_slug;
    let composable = spec.store_composable();
    let mut set = GeneratedFileSet::new();

    set.add(
        format!("stores/{}.ts", slug),
        format!(
            r#"import {{ defineStore }} from 'pinia'

export const {composable} = defineStore('{slug}', {{
  state: () => ({{
    {slug}: [],
    loading: false
  }}),
  actions: {{
    async fetchAll() {{
      this.loading = true
      try {{
        this.{slug} = await $fetch('/api/{slug}')
      }} finally {{
        this.loading = false
      }}
    }},
    async create(data) {{
      await $fetch('/api/{slug}/create', {{
        method: 'POST',
        body: data
      }})
      await this.fetchAll()
    }},
    async update(id, data) {{
      await $fetch(`/api/{slug}/${{id}}`, {{
        method: 'PUT',
        body: data
      }})
      await this.fetchAll()
    }},
    async delete(id) {{
      await $fetch(`/api/{slug}/${{id}}`, {{
        method: 'DELETE'
      }})
      await this.fetchAll()
    }},
    async findOne(id) {{
      return await $fetch(`/api/{slug}/${{id}}`)
    }}
  }}
}})
"#
        ),
    );

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelSpec;

    fn store_content(name: &str) -> String {
        let spec = ModelSpec::new(name, &[]).unwrap();
        let set = file_set(&spec);
        let path = format!("stores/{}.ts", spec.table_slug);
        set.content(path).unwrap().to_string()
    }

    #[test]
    fn test_store_module_named_by_slug() {
        let spec = ModelSpec::new("post", &[]).unwrap();
        let set = file_set(&spec);
        assert_eq!(set.len(), 1);
        assert!(set.content("stores/posts.ts").is_some());
    }

    #[test]
    fn test_composable_and_state_shape() {
        let content = store_content("post");
        assert!(content.contains("export const usePostStore = defineStore('posts', {"));
        assert!(content.contains("posts: [],"));
        assert!(content.contains("loading: false"));
    }

    #[test]
    fn test_all_five_actions_present() {
        let content = store_content("post");
        for action in [
            "async fetchAll()",
            "async create(data)",
            "async update(id, data)",
            "async delete(id)",
            "async findOne(id)",
        ] {
            assert!(content.contains(action), "missing action: {}", action);
        }
    }

    #[test]
    fn test_fetch_all_toggles_loading() {
        let content = store_content("post");
        assert!(content.contains("this.loading = true"));
        assert!(content.contains("this.loading = false"));
        // The reset must survive a failed fetch
        assert!(content.contains("} finally {"));
    }

    #[test]
    fn test_mutations_resync_from_server() {
        let content = store_content("post");
        // create, update, delete each re-fetch; fetchAll itself does not
        assert_eq!(content.matches("await this.fetchAll()").count(), 3);
    }

    #[test]
    fn test_find_one_does_not_touch_state() {
        let content = store_content("post");
        let find_one = content.split("async findOne").nth(1).unwrap();
        assert!(find_one.contains("return await $fetch(`/api/posts/${id}`)"));
        assert!(!find_one.contains("this."));
    }
}
