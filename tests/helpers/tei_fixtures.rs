//! TEI documents shaped like the ssj500k / SUK corpora.

/// One paragraph, one sentence: "Ana teče" with a UD root link.
pub const ANA_TECE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <text>
    <body>
      <div xml:id="ssj1">
        <bibl><title>Ana</title></bibl>
        <p xml:id="ssj1.1">
          <s xml:id="ssj1.1.1">
            <w xml:id="ssj1.1.1.t1" lemma="Ana" msd="UposTag=PROPN|Case=Nom|Gender=Fem|Number=Sing" ana="mte:Slzei">Ana</w>
            <w xml:id="ssj1.1.1.t2" lemma="teči" msd="UposTag=VERB|Aspect=Imp|Mood=Ind|Number=Sing|Person=3|Tense=Pres|VerbForm=Fin" ana="mte:Ggnste">teče</w>
            <linkGrp type="UD-SYN" targFunc="head argument" corresp="#ssj1.1.1">
              <link ana="ud-syn:nsubj" target="#ssj1.1.1.t2 #ssj1.1.1.t1"/>
              <link ana="ud-syn:root" target="#ssj1.1.1 #ssj1.1.1.t2"/>
            </linkGrp>
          </s>
        </p>
      </div>
    </body>
  </text>
</TEI>"##;

/// Two documents nested at different depths, multiword segments,
/// punctuation with `join`, and all three link layers.
pub const CORPUS: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<teiCorpus xmlns="http://www.tei-c.org/ns/1.0">
  <teiHeader><fileDesc><titleStmt><title>sample</title></titleStmt></fileDesc></teiHeader>
  <TEI>
    <text>
      <body>
        <div xml:id="ssj2">
          <bibl><title>Novice</title><date>2004</date></bibl>
          <p xml:id="ssj2.1">
            <s xml:id="ssj2.1.1">
              <w xml:id="ssj2.1.1.t1" lemma="vreme" msd="UposTag=NOUN|Case=Nom|Gender=Neut|Number=Sing" ana="mte:Sosei">Vreme</w>
              <w xml:id="ssj2.1.1.t2" lemma="biti" msd="UposTag=AUX|Mood=Ind|Number=Sing|Person=3|Tense=Fut|VerbForm=Fin" ana="mte:Gp-ptez">bo</w>
              <seg type="mwe">
                <w xml:id="ssj2.1.1.t3" lemma="na" msd="UposTag=ADP|Case=Loc" ana="mte:Dm">na</w>
                <w xml:id="ssj2.1.1.t4" lemma="splošno" msd="UposTag=ADV|Degree=Pos" ana="mte:Rsn">splošno</w>
              </seg>
              <w xml:id="ssj2.1.1.t5" lemma="lep" msd="UposTag=ADJ|Case=Nom|Degree=Pos|Gender=Neut|Number=Sing" ana="mte:Ppnsei">lepo</w>
              <pc xml:id="ssj2.1.1.t6" msd="UposTag=PUNCT" ana="mte:Z" join="right">.</pc>
              <linkGrp type="UD-SYN" targFunc="head argument">
                <link ana="ud-syn:nsubj" target="#ssj2.1.1.t5 #ssj2.1.1.t1"/>
                <link ana="ud-syn:cop" target="#ssj2.1.1.t5 #ssj2.1.1.t2"/>
                <link ana="ud-syn:case" target="#ssj2.1.1.t4 #ssj2.1.1.t3"/>
                <link ana="ud-syn:advmod" target="#ssj2.1.1.t5 #ssj2.1.1.t4"/>
                <link ana="ud-syn:root" target="#ssj2.1.1 #ssj2.1.1.t5"/>
                <link ana="ud-syn:punct" target="#ssj2.1.1.t5 #ssj2.1.1.t6"/>
              </linkGrp>
              <linkGrp type="JOS-SYN" targFunc="head argument">
                <link ana="jos-syn:ena" target="#ssj2.1.1.t2 #ssj2.1.1.t1"/>
                <link ana="jos-syn:modra" target="#ssj2.1.1 #ssj2.1.1.t2"/>
                <link ana="jos-syn:dol" target="#ssj2.1.1.t4 #ssj2.1.1.t3"/>
                <link ana="jos-syn:dol" target="#ssj2.1.1.t2 #ssj2.1.1.t4"/>
                <link ana="jos-syn:dve" target="#ssj2.1.1.t2 #ssj2.1.1.t5"/>
                <link ana="jos-syn:modra" target="#ssj2.1.1 #ssj2.1.1.t6"/>
              </linkGrp>
              <linkGrp type="SRL" targFunc="head argument">
                <link ana="srl:ACT" target="#ssj2.1.1.t2 #ssj2.1.1.t1"/>
                <link ana="srl:MANN" target="#ssj2.1.1.t2 #ssj2.1.1.t4"/>
                <link ana="srl:RESLT" target="#ssj2.1.1.t2 #ssj2.1.1.t5"/>
              </linkGrp>
            </s>
            <s xml:id="ssj2.1.2">
              <pc xml:id="ssj2.1.2.t1" msd="UposTag=PUNCT" ana="mte:Z">»</pc>
              <w xml:id="ssj2.1.2.t2" lemma="da" msd="UposTag=PART" ana="mte:L" join="right">Da</w>
              <pc xml:id="ssj2.1.2.t3" msd="UposTag=PUNCT" ana="mte:Z" join="right">!</pc>
            </s>
          </p>
          <p xml:id="ssj2.2">
            <s xml:id="ssj2.2.1">
              <w xml:id="ssj2.2.1.t1" lemma="konec" msd="UposTag=NOUN|Case=Nom|Gender=Masc|Number=Sing" ana="mte:Somei">Konec</w>
              <linkGrp type="UD-SYN" targFunc="head argument">
                <link ana="ud-syn:root" target="#ssj2.2.1 #ssj2.2.1.t1"/>
              </linkGrp>
            </s>
          </p>
        </div>
      </body>
    </text>
  </TEI>
  <TEI>
    <text>
      <group>
        <body>
          <div xml:id="ssj3">
            <bibl><title>Forum</title></bibl>
            <p xml:id="ssj3.1">
              <s xml:id="ssj3.1.1">
                <w xml:id="ssj3.1.1.t1" lemma="hvala" msd="UposTag=INTJ" ana="mte:M">Hvala</w>
                <linkGrp type="UD-SYN" targFunc="head argument">
                  <link ana="ud-syn:root" target="#ssj3.1.1 #ssj3.1.1.t1"/>
                </linkGrp>
              </s>
            </p>
          </div>
        </body>
      </group>
    </text>
  </TEI>
</teiCorpus>"##;
