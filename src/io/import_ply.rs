// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stanford PLY importer
//!
//! Decoding is done by `ply-rs`. Only the `x y z` properties of the `vertex`
//! element and the index list of the `face` element are kept. Polygons are
//! fan-triangulated.

use crate::geometry::{Mesh, Triangle};
use anyhow::{anyhow, bail, Context, Result};
use nalgebra::Point3;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Encoding, Header, Property, PropertyType, ScalarType};
use std::io::Cursor;
use std::path::Path;

/// Load a PLY file into a mesh
pub fn import(path: &Path) -> Result<Mesh> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read PLY file: {:?}", path))?;
    parse(&data).with_context(|| format!("Failed to parse PLY file: {:?}", path))
}

/// Parse PLY bytes into a mesh
pub fn parse(data: &[u8]) -> Result<Mesh> {
    let parser = Parser::<DefaultElement>::new();
    let mut reader = Cursor::new(data);

    let header = parser
        .read_header(&mut reader)
        .context("Invalid PLY header")?;
    let body_len = data.len().saturating_sub(reader.position() as usize);
    check_element_counts(&header, body_len)?;

    let payload = parser
        .read_payload(&mut reader, &header)
        .context("Invalid PLY body")?;

    let vertices = payload
        .get("vertex")
        .ok_or_else(|| anyhow!("PLY file has no vertex element"))?;

    let mut mesh = Mesh::new();
    for vertex in vertices {
        let coord = |axis: &str| {
            vertex
                .get(axis)
                .and_then(scalar)
                .ok_or_else(|| anyhow!("PLY vertex lacks a numeric '{}' property", axis))
        };
        mesh.add_vertex(Point3::new(coord("x")?, coord("y")?, coord("z")?));
    }

    let vertex_count = mesh.vertex_count();
    for face in payload.get("face").into_iter().flatten() {
        let polygon = face
            .get("vertex_indices")
            .or_else(|| face.get("vertex_index"))
            .and_then(indices)
            .ok_or_else(|| anyhow!("PLY face element lacks a vertex_indices list"))?;

        if let Some(bad) = polygon.iter().find(|&&i| i < 0 || i as usize >= vertex_count) {
            bail!("PLY face index {} out of range", bad);
        }
        let polygon: Vec<usize> = polygon.into_iter().map(|i| i as usize).collect();

        for k in 1..polygon.len().saturating_sub(1) {
            mesh.add_triangle(Triangle::new([polygon[0], polygon[k], polygon[k + 1]]));
        }
    }

    Ok(mesh)
}

/// Reject headers declaring more records than the body could hold
fn check_element_counts(header: &Header, body_len: usize) -> Result<()> {
    let mut required = 0usize;

    for element in header.elements.values() {
        let record_size = match header.encoding {
            Encoding::Ascii => 1,
            Encoding::BinaryLittleEndian | Encoding::BinaryBigEndian => element
                .properties
                .values()
                .map(|p| match &p.data_type {
                    PropertyType::Scalar(ty) => scalar_size(ty),
                    PropertyType::List(count_ty, _) => scalar_size(count_ty),
                })
                .sum::<usize>()
                .max(1),
        };
        required = required.saturating_add(element.count.saturating_mul(record_size));
    }

    if required > body_len {
        bail!(
            "PLY header declares more data than the file holds ({} bytes needed, {} present)",
            required,
            body_len
        );
    }
    Ok(())
}

fn scalar_size(ty: &ScalarType) -> usize {
    match ty {
        ScalarType::Char | ScalarType::UChar => 1,
        ScalarType::Short | ScalarType::UShort => 2,
        ScalarType::Int | ScalarType::UInt | ScalarType::Float => 4,
        ScalarType::Double => 8,
    }
}

fn scalar(property: &Property) -> Option<f64> {
    Some(match *property {
        Property::Char(v) => v as f64,
        Property::UChar(v) => v as f64,
        Property::Short(v) => v as f64,
        Property::UShort(v) => v as f64,
        Property::Int(v) => v as f64,
        Property::UInt(v) => v as f64,
        Property::Float(v) => v as f64,
        Property::Double(v) => v,
        _ => return None,
    })
}

fn indices(property: &Property) -> Option<Vec<i64>> {
    Some(match property {
        Property::ListChar(v) => v.iter().map(|&i| i as i64).collect(),
        Property::ListUChar(v) => v.iter().map(|&i| i as i64).collect(),
        Property::ListShort(v) => v.iter().map(|&i| i as i64).collect(),
        Property::ListUShort(v) => v.iter().map(|&i| i as i64).collect(),
        Property::ListInt(v) => v.iter().map(|&i| i as i64).collect(),
        Property::ListUInt(v) => v.iter().map(|&i| i as i64).collect(),
        _ => return None,
    })
}
