//! Common test utilities for integration tests

use std::fs;
use std::io::Write;
use std::path::Path;

/// Helper function to create a test XML file, creating parent folders as needed
#[allow(dead_code)]
pub fn create_test_xml_file(path: &Path, content: &str) {
    let parent = path.parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    fs::File::create(path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
}

/// Wraps MODS body elements in a namespaced `<mods:mods>` document
#[allow(dead_code)]
pub fn mods_document(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<mods xmlns="http://www.loc.gov/mods/v3" xmlns:xlink="http://www.w3.org/1999/xlink" version="3.5">
{body}
</mods>"#
    )
}

/// A photograph record with a value for every mapped generic column
#[allow(dead_code)]
pub const PHOTOGRAPH_RECORD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mods:mods xmlns:mods="http://www.loc.gov/mods/v3" version="3.5">
  <mods:titleInfo><mods:title>Front Street looking east</mods:title></mods:titleInfo>
  <mods:titleInfo type="alternative"><mods:title>Kaslo main street</mods:title></mods:titleInfo>
  <mods:name type="personal">
    <mods:namePart type="given">Ada</mods:namePart>
    <mods:namePart type="family">Walker</mods:namePart>
    <mods:role><mods:roleTerm type="text" authority="marcrelator">creator</mods:roleTerm></mods:role>
  </mods:name>
  <mods:name type="corporate">
    <mods:namePart>Kaslo Photo Studio</mods:namePart>
    <mods:role><mods:roleTerm type="text">creator</mods:roleTerm></mods:role>
  </mods:name>
  <mods:name type="personal">
    <mods:namePart type="given">Ben</mods:namePart>
    <mods:namePart type="family">Okano</mods:namePart>
    <mods:role><mods:roleTerm type="text">contributor</mods:roleTerm></mods:role>
  </mods:name>
  <mods:name type="corporate">
    <mods:namePart>Kaslo Board of Trade</mods:namePart>
    <mods:role><mods:roleTerm type="text">contributor</mods:roleTerm></mods:role>
  </mods:name>
  <mods:typeOfResource>still image</mods:typeOfResource>
  <mods:genre authority="aat">photographs</mods:genre>
  <mods:originInfo>
    <mods:dateIssued encoding="w3cdtf" keyDate="yes" qualifier="approximate">Jun-17</mods:dateIssued>
    <mods:publisher>Kootenay Lake Historical Society</mods:publisher>
  </mods:originInfo>
  <mods:language><mods:languageTerm type="text">English</mods:languageTerm></mods:language>
  <mods:language><mods:languageTerm type="text">Japanese</mods:languageTerm></mods:language>
  <mods:physicalDescription>
    <mods:internetMediaType>image/tiff</mods:internetMediaType>
    <mods:extent>1 photograph ; 10 x 15 cm</mods:extent>
  </mods:physicalDescription>
  <mods:abstract>Street view with horse-drawn carts &amp; shop fronts.</mods:abstract>
  <mods:note>Donated 1975</mods:note>
  <mods:subject><mods:topic>Streets</mods:topic></mods:subject>
  <mods:subject><mods:topic>Horses</mods:topic></mods:subject>
  <mods:subject><mods:geographic>Kaslo (B.C.)</mods:geographic></mods:subject>
  <mods:subject><mods:temporal>1910-1920</mods:temporal></mods:subject>
  <mods:subject>
    <mods:name type="personal">
      <mods:namePart type="given">John</mods:namePart>
      <mods:namePart type="family">Kane</mods:namePart>
    </mods:name>
  </mods:subject>
  <mods:subject><mods:name type="corporate"><mods:namePart>Canadian Pacific Railway</mods:namePart></mods:name></mods:subject>
  <mods:subject><mods:name type="corporate"><mods:namePart>Great Northern Railway</mods:namePart></mods:name></mods:subject>
  <mods:subject>
    <mods:geographic><mods:cartographics><mods:coordinates>49.91,-116.91</mods:coordinates></mods:cartographics></mods:geographic>
  </mods:subject>
  <mods:classification>971.1</mods:classification>
  <mods:identifier type="local">2001.002.0123</mods:identifier>
  <mods:identifier type="isbn">978-0-00-000000-2</mods:identifier>
  <mods:identifier type="uri">http://example.org/klhs/2001</mods:identifier>
  <mods:identifier type="access">KLHS-2001</mods:identifier>
  <mods:location><mods:physicalLocation>Kootenay Lake Archives</mods:physicalLocation></mods:location>
  <mods:accessCondition displayLabel="Restricted">Contact the archives before reuse</mods:accessCondition>
  <mods:accessCondition displayLabel="Creative Commons license">https://creativecommons.org/licenses/by-nc/4.0/</mods:accessCondition>
  <mods:accessCondition displayLabel="Rights Statement">No known restrictions</mods:accessCondition>
  <mods:recordInfo>
    <mods:recordOrigin>Converted from spreadsheet</mods:recordOrigin>
    <mods:recordCreationDate>2019-03-04</mods:recordCreationDate>
  </mods:recordInfo>
  <mods:relatedItem type="host">
    <mods:titleInfo><mods:title>Kootenay Lake Historical Society photographs</mods:title></mods:titleInfo>
    <mods:identifier>klhs:photos</mods:identifier>
  </mods:relatedItem>
</mods:mods>"#;

/// A newspaper issue record
#[allow(dead_code)]
pub const NEWSPAPER_RECORD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mods xmlns="http://www.loc.gov/mods/v3">
  <titleInfo><title>The Kootenaian, June 21, 1917</title></titleInfo>
  <originInfo>
    <dateIssued encoding="w3cdtf" keyDate="yes">1917-06-21</dateIssued>
    <publisher>Kootenaian Publishing</publisher>
  </originInfo>
  <part>
    <detail type="volume"><number>24</number></detail>
    <detail type="issue"><number>12</number></detail>
  </part>
  <relatedItem type="host">
    <titleInfo><title>The Kootenaian</title></titleInfo>
    <identifier>kaslo_kootenaian</identifier>
  </relatedItem>
</mods>"#;
