//! Nuxt page generation
//!
//! Four pages per model under `pages/<slug>/`: list, create, detail
//! (nested under `[id]/` as `[id].vue`), and edit. List and detail
//! display are driven by the parsed field list - the first string-typed
//! field is the display field, falling back to `id` - and create/edit
//! embed the generated form component rather than an inline form.

use super::fileset::GeneratedFileSet;
use crate::model::ModelSpec;

/// Build the four page files for one model
pub fn file_set(spec: &ModelSpec) -> GeneratedFileSet {
    let class = &spec.class_name;
    let slug = &spec.table_slug;
    let composable = spec.store_composable();
    let display = spec.display_field();
    let mut set = GeneratedFileSet::new();

    set.add(
        format!("pages/{}/index.vue", slug),
        format!(
            r#"<script setup>
import {{ {composable} }} from '@/stores/{slug}'

const store = {composable}()
onMounted(() => store.fetchAll())
</script>

<template>
  <div>
    <h1>{class} List</h1>
    <NuxtLink :to="'/{slug}/create'">Create New</NuxtLink>
    <p v-if="store.loading">Loading...</p>
    <{class}Table v-else :items="store.{slug}" />
  </div>
</template>
"#
        ),
    );

    set.add(
        format!("pages/{}/create.vue", slug),
        format!(
            r#"<script setup>
import {{ {composable} }} from '@/stores/{slug}'
import {{ ref }} from 'vue'
import {{ useRouter }} from 'vue-router'

const store = {composable}()
const router = useRouter()
const form = ref({{}})

async function submit() {{
  await store.create(form.value)
  router.push('/{slug}')
}}
</script>

<template>
  <div>
    <h1>Create {class}</h1>
    <{class}Form :form="form" @submit="submit" />
  </div>
</template>
"#
        ),
    );

    set.add(
        format!("pages/{}/[id].vue", slug),
        format!(
            r#"<script setup>
import {{ {composable} }} from '@/stores/{slug}'
import {{ useRoute }} from 'vue-router'
import {{ ref, onMounted }} from 'vue'

const route = useRoute()
const store = {composable}()
const item = ref(null)

onMounted(async () => {{
  item.value = await store.findOne(route.params.id)
}})
</script>

<template>
  <div v-if="item">
    <h1>{{{{ item.{display} || '{class}' }}}}</h1>
    <dl>
{field_rows}    </dl>
    <NuxtLink :to="'/{slug}/' + item.id + '/edit'">Edit</NuxtLink>
  </div>
</template>
"#,
            field_rows = detail_rows(spec),
        ),
    );

    set.add(
        format!("pages/{}/[id]/edit.vue", slug),
        format!(
            r#"<script setup>
import {{ {composable} }} from '@/stores/{slug}'
import {{ useRoute, useRouter }} from 'vue-router'
import {{ ref, onMounted }} from 'vue'

const route = useRoute()
const router = useRouter()
const store = {composable}()
const form = ref({{}})

onMounted(async () => {{
  form.value = await store.findOne(route.params.id)
}})

async function submit() {{
  await store.update(route.params.id, form.value)
  router.push('/{slug}')
}}
</script>

<template>
  <div>
    <h1>Edit {class}</h1>
    <{class}Form :form="form" @submit="submit" />
  </div>
</template>
"#
        ),
    );

    set
}

/// One `<dt>/<dd>` pair per declared field, plus the id row first
fn detail_rows(spec: &ModelSpec) -> String {
    let mut rows = String::new();
    rows.push_str("      <dt>id</dt>\n      <dd>{{ item.id }}</dd>\n");
    for field in &spec.fields {
        rows.push_str(&format!(
            "      <dt>{name}</dt>\n      <dd>{{{{ item.{name} }}}}</dd>\n",
            name = field.name
        ));
    }
    rows
}
