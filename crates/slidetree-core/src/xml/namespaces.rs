#![allow(non_snake_case)]

use super::xname::XName;

pub mod P {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

    pub fn presentation() -> XName { XName::new(NS, "presentation") }
    pub fn sldSz() -> XName { XName::new(NS, "sldSz") }
    pub fn sld() -> XName { XName::new(NS, "sld") }
    pub fn sldLayout() -> XName { XName::new(NS, "sldLayout") }
    pub fn sldMaster() -> XName { XName::new(NS, "sldMaster") }
    pub fn notes() -> XName { XName::new(NS, "notes") }
    pub fn drawing() -> XName { XName::new(NS, "drawing") }
    pub fn cSld() -> XName { XName::new(NS, "cSld") }
    pub fn bg() -> XName { XName::new(NS, "bg") }
    pub fn bgPr() -> XName { XName::new(NS, "bgPr") }
    pub fn bgRef() -> XName { XName::new(NS, "bgRef") }
    pub fn clrMap() -> XName { XName::new(NS, "clrMap") }
    pub fn spTree() -> XName { XName::new(NS, "spTree") }
    pub fn sp() -> XName { XName::new(NS, "sp") }
    pub fn cxnSp() -> XName { XName::new(NS, "cxnSp") }
    pub fn pic() -> XName { XName::new(NS, "pic") }
    pub fn graphicFrame() -> XName { XName::new(NS, "graphicFrame") }
    pub fn grpSp() -> XName { XName::new(NS, "grpSp") }
    pub fn nvSpPr() -> XName { XName::new(NS, "nvSpPr") }
    pub fn nvCxnSpPr() -> XName { XName::new(NS, "nvCxnSpPr") }
    pub fn nvPicPr() -> XName { XName::new(NS, "nvPicPr") }
    pub fn nvGraphicFramePr() -> XName { XName::new(NS, "nvGraphicFramePr") }
    pub fn nvGrpSpPr() -> XName { XName::new(NS, "nvGrpSpPr") }
    pub fn grpSpPr() -> XName { XName::new(NS, "grpSpPr") }
    pub fn cNvPr() -> XName { XName::new(NS, "cNvPr") }
    pub fn cNvSpPr() -> XName { XName::new(NS, "cNvSpPr") }
    pub fn nvPr() -> XName { XName::new(NS, "nvPr") }
    pub fn ph() -> XName { XName::new(NS, "ph") }
    pub fn spPr() -> XName { XName::new(NS, "spPr") }
    pub fn style() -> XName { XName::new(NS, "style") }
    pub fn txBody() -> XName { XName::new(NS, "txBody") }
    pub fn txXfrm() -> XName { XName::new(NS, "txXfrm") }
    pub fn xfrm() -> XName { XName::new(NS, "xfrm") }
    pub fn blipFill() -> XName { XName::new(NS, "blipFill") }
    pub fn oleObj() -> XName { XName::new(NS, "oleObj") }
    pub fn extLst() -> XName { XName::new(NS, "extLst") }
    pub fn txStyles() -> XName { XName::new(NS, "txStyles") }
    pub fn titleStyle() -> XName { XName::new(NS, "titleStyle") }
    pub fn bodyStyle() -> XName { XName::new(NS, "bodyStyle") }
    pub fn otherStyle() -> XName { XName::new(NS, "otherStyle") }
}

pub mod A {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    pub fn xfrm() -> XName { XName::new(NS, "xfrm") }
    pub fn off() -> XName { XName::new(NS, "off") }
    pub fn ext() -> XName { XName::new(NS, "ext") }
    pub fn chOff() -> XName { XName::new(NS, "chOff") }
    pub fn chExt() -> XName { XName::new(NS, "chExt") }
    pub fn prstGeom() -> XName { XName::new(NS, "prstGeom") }
    pub fn custGeom() -> XName { XName::new(NS, "custGeom") }
    pub fn pathLst() -> XName { XName::new(NS, "pathLst") }
    pub fn path() -> XName { XName::new(NS, "path") }
    pub fn pt() -> XName { XName::new(NS, "pt") }
    pub fn graphic() -> XName { XName::new(NS, "graphic") }
    pub fn graphicData() -> XName { XName::new(NS, "graphicData") }
    pub fn tbl() -> XName { XName::new(NS, "tbl") }
    pub fn tblPr() -> XName { XName::new(NS, "tblPr") }
    pub fn tableStyleId() -> XName { XName::new(NS, "tableStyleId") }
    pub fn tr() -> XName { XName::new(NS, "tr") }
    pub fn tc() -> XName { XName::new(NS, "tc") }
    pub fn tcPr() -> XName { XName::new(NS, "tcPr") }
    pub fn txBody() -> XName { XName::new(NS, "txBody") }
    pub fn bodyPr() -> XName { XName::new(NS, "bodyPr") }
    pub fn p() -> XName { XName::new(NS, "p") }
    pub fn pPr() -> XName { XName::new(NS, "pPr") }
    pub fn r() -> XName { XName::new(NS, "r") }
    pub fn rPr() -> XName { XName::new(NS, "rPr") }
    pub fn t() -> XName { XName::new(NS, "t") }
    pub fn br() -> XName { XName::new(NS, "br") }
    pub fn fld() -> XName { XName::new(NS, "fld") }
    pub fn solidFill() -> XName { XName::new(NS, "solidFill") }
    pub fn noFill() -> XName { XName::new(NS, "noFill") }
    pub fn gradFill() -> XName { XName::new(NS, "gradFill") }
    pub fn gsLst() -> XName { XName::new(NS, "gsLst") }
    pub fn gs() -> XName { XName::new(NS, "gs") }
    pub fn blipFill() -> XName { XName::new(NS, "blipFill") }
    pub fn blip() -> XName { XName::new(NS, "blip") }
    pub fn srgbClr() -> XName { XName::new(NS, "srgbClr") }
    pub fn schemeClr() -> XName { XName::new(NS, "schemeClr") }
    pub fn sysClr() -> XName { XName::new(NS, "sysClr") }
    pub fn prstClr() -> XName { XName::new(NS, "prstClr") }
    pub fn ln() -> XName { XName::new(NS, "ln") }
    pub fn prstDash() -> XName { XName::new(NS, "prstDash") }
    pub fn effectLst() -> XName { XName::new(NS, "effectLst") }
    pub fn outerShdw() -> XName { XName::new(NS, "outerShdw") }
    pub fn videoFile() -> XName { XName::new(NS, "videoFile") }
    pub fn audioFile() -> XName { XName::new(NS, "audioFile") }
    pub fn fillRef() -> XName { XName::new(NS, "fillRef") }
    pub fn lnRef() -> XName { XName::new(NS, "lnRef") }
    pub fn fontRef() -> XName { XName::new(NS, "fontRef") }
    pub fn tblStyleLst() -> XName { XName::new(NS, "tblStyleLst") }
    pub fn tblStyle() -> XName { XName::new(NS, "tblStyle") }
    pub fn tblBg() -> XName { XName::new(NS, "tblBg") }
    pub fn tcStyle() -> XName { XName::new(NS, "tcStyle") }
    pub fn tcTxStyle() -> XName { XName::new(NS, "tcTxStyle") }
    pub fn tcBdr() -> XName { XName::new(NS, "tcBdr") }
    pub fn fill() -> XName { XName::new(NS, "fill") }
    pub fn theme() -> XName { XName::new(NS, "theme") }
    pub fn themeElements() -> XName { XName::new(NS, "themeElements") }
    pub fn lumMod() -> XName { XName::new(NS, "lumMod") }
    pub fn lumOff() -> XName { XName::new(NS, "lumOff") }
    pub fn shade() -> XName { XName::new(NS, "shade") }
    pub fn tint() -> XName { XName::new(NS, "tint") }
    pub fn lstStyle() -> XName { XName::new(NS, "lstStyle") }
    pub fn lvl1pPr() -> XName { XName::new(NS, "lvl1pPr") }
    pub fn defRPr() -> XName { XName::new(NS, "defRPr") }
    pub fn moveTo() -> XName { XName::new(NS, "moveTo") }
    pub fn lnTo() -> XName { XName::new(NS, "lnTo") }
    pub fn cubicBezTo() -> XName { XName::new(NS, "cubicBezTo") }
    pub fn quadBezTo() -> XName { XName::new(NS, "quadBezTo") }
    pub fn arcTo() -> XName { XName::new(NS, "arcTo") }
    pub fn close() -> XName { XName::new(NS, "close") }
    pub fn clrScheme() -> XName { XName::new(NS, "clrScheme") }

    /// Table-style region element (`wholeTbl`, `band1H`, `nwCell`, ...).
    pub fn region(local: &str) -> XName { XName::new(NS, local) }

    /// Border side element inside `a:tcBdr` (`left`, `right`, `top`, `bottom`).
    pub fn side(local: &str) -> XName { XName::new(NS, local) }
}

pub mod R {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    pub fn id() -> XName { XName::new(NS, "id") }
    pub fn embed() -> XName { XName::new(NS, "embed") }
    pub fn link() -> XName { XName::new(NS, "link") }
    pub fn dm() -> XName { XName::new(NS, "dm") }
}

pub mod MC {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";

    pub fn AlternateContent() -> XName { XName::new(NS, "AlternateContent") }
    pub fn Choice() -> XName { XName::new(NS, "Choice") }
    pub fn Fallback() -> XName { XName::new(NS, "Fallback") }
}

pub mod C {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";

    pub fn chart() -> XName { XName::new(NS, "chart") }
    pub fn chartSpace() -> XName { XName::new(NS, "chartSpace") }
    pub fn plotArea() -> XName { XName::new(NS, "plotArea") }
    pub fn ser() -> XName { XName::new(NS, "ser") }
    pub fn tx() -> XName { XName::new(NS, "tx") }
    pub fn strRef() -> XName { XName::new(NS, "strRef") }
    pub fn strCache() -> XName { XName::new(NS, "strCache") }
    pub fn numRef() -> XName { XName::new(NS, "numRef") }
    pub fn numCache() -> XName { XName::new(NS, "numCache") }
    pub fn numLit() -> XName { XName::new(NS, "numLit") }
    pub fn strLit() -> XName { XName::new(NS, "strLit") }
    pub fn pt() -> XName { XName::new(NS, "pt") }
    pub fn v() -> XName { XName::new(NS, "v") }
    pub fn val() -> XName { XName::new(NS, "val") }
    pub fn cat() -> XName { XName::new(NS, "cat") }
    pub fn xVal() -> XName { XName::new(NS, "xVal") }
    pub fn yVal() -> XName { XName::new(NS, "yVal") }
    pub fn barDir() -> XName { XName::new(NS, "barDir") }
    pub fn grouping() -> XName { XName::new(NS, "grouping") }
    pub fn holeSize() -> XName { XName::new(NS, "holeSize") }
    pub fn marker() -> XName { XName::new(NS, "marker") }
    pub fn style() -> XName { XName::new(NS, "style") }
}

pub mod DGM {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/diagram";

    pub fn relIds() -> XName { XName::new(NS, "relIds") }
}

pub mod DSP {
    use super::XName;
    pub const NS: &str = "http://schemas.microsoft.com/office/drawing/2008/diagram";

    pub fn dataModelExt() -> XName { XName::new(NS, "dataModelExt") }
}

pub mod M {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";

    pub fn oMath() -> XName { XName::new(NS, "oMath") }
    pub fn val() -> XName { XName::new(NS, "val") }
}

pub mod graphic_uri {
    pub const TABLE: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";
    pub const CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
    pub const DIAGRAM: &str = "http://schemas.openxmlformats.org/drawingml/2006/diagram";
    pub const OLE: &str = "http://schemas.openxmlformats.org/presentationml/2006/ole";
}
