//! PDF and file fixtures for the CLI tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::{dictionary, Object, Stream};

/// Single-page PDF with one text object per line.
pub fn write_pdf(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let content: String = lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("BT /F1 12 Tf 50 {} Td ({}) Tj ET\n", 720 - i * 18, line))
        .collect();
    write_pdf_content(dir, name, &content)
}

/// Single-page PDF with every line in one text object, stepped with `T*`.
pub fn write_block_pdf(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let shown: Vec<String> = lines.iter().map(|line| format!("({}) Tj", line)).collect();
    let content = format!("BT /F1 12 Tf 18 TL 50 720 Td {} ET\n", shown.join(" T* "));
    write_pdf_content(dir, name, &content)
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn write_pdf_content(dir: &Path, name: &str, content: &str) -> PathBuf {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.as_bytes().to_vec()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
        "Resources" => dictionary! { "Font" => dictionary! { "F1" => font_id } },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::from(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}
