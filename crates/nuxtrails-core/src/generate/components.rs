//! Vue component generation
//!
//! Two shared components per model: `<Class>Form.vue` and
//! `<Class>Table.vue`. Both are rendered from the parsed field list - one
//! labeled input per field in the form (widget chosen by type), one
//! column per field in the table - rather than assuming any particular
//! field names.

use super::fileset::GeneratedFileSet;
use crate::model::{FieldDescriptor, ModelSpec};

/// Build the form and table components for one model
pub fn file_set(spec: &ModelSpec) -> GeneratedFileSet {
    let mut set = GeneratedFileSet::new();

    set.add(
        format!("components/{}Form.vue", spec.class_name),
        form_component(spec),
    );
    set.add(
        format!("components/{}Table.vue", spec.class_name),
        table_component(spec),
    );

    set
}

fn form_component(spec: &ModelSpec) -> String {
    let mut inputs = String::new();
    for field in &spec.fields {
        inputs.push_str(&format!(
            "    <div>\n      <label>{}</label>\n      {}\n    </div>\n",
            label(&field.name),
            form_input(field)
        ));
    }

    format!(
        r#"<script setup>
defineProps({{
  form: Object
}})
defineEmits(['submit'])
</script>

<template>
  <form @submit.prevent="$emit('submit')">
{inputs}    <button type="submit">Submit</button>
  </form>
</template>
"#
    )
}

/// Pick an input widget from the field's source annotation
fn form_input(field: &FieldDescriptor) -> String {
    let name = &field.name;
    let placeholder = label(name);
    match field.source_type.as_deref() {
        Some("boolean") => format!(r#"<input type="checkbox" v-model="form.{name}" />"#),
        Some("text") => {
            format!(r#"<textarea v-model="form.{name}" placeholder="{placeholder}"></textarea>"#)
        }
        Some("int") | Some("float") => format!(
            r#"<input type="number" v-model.number="form.{name}" placeholder="{placeholder}" />"#
        ),
        Some("date") => format!(r#"<input type="date" v-model="form.{name}" />"#),
        _ => format!(r#"<input v-model="form.{name}" placeholder="{placeholder}" />"#),
    }
}

fn table_component(spec: &ModelSpec) -> String {
    let slug = &spec.table_slug;

    let mut headers = String::from("          <th>ID</th>\n");
    for field in &spec.fields {
        headers.push_str(&format!("          <th>{}</th>\n", label(&field.name)));
    }
    headers.push_str("          <th>Actions</th>\n");

    let mut cells = String::from("          <td>{{ item.id }}</td>\n");
    for field in &spec.fields {
        cells.push_str(&format!("          <td>{}</td>\n", table_cell(field)));
    }

    format!(
        r#"<script setup>
defineProps({{
  items: Array
}})
</script>

<template>
  <table>
    <thead>
      <tr>
{headers}      </tr>
    </thead>
    <tbody>
      <tr v-for="item in items" :key="item.id">
{cells}          <td>
          <NuxtLink :to="'/{slug}/' + item.id">View</NuxtLink> |
          <NuxtLink :to="'/{slug}/' + item.id + '/edit'">Edit</NuxtLink>
        </td>
      </tr>
    </tbody>
  </table>
</template>
"#
    )
}

fn table_cell(field: &FieldDescriptor) -> String {
    let name = &field.name;
    match field.source_type.as_deref() {
        Some("boolean") => format!("{{{{ item.{name} ? 'Yes' : 'No' }}}}"),
        _ => format!("{{{{ item.{name} }}}}"),
    }
}

/// Field name with its first character upper-cased, for labels/headers
fn label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
